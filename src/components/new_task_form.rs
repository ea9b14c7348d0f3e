//! New Task Form Component
//!
//! Title input plus submit button. Blank titles are ignored.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let submitting = move || ctx.state.with(|s| s.submitting);
    let can_submit = move || ctx.state.with(|s| s.can_submit());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(title) = ctx.begin_submit() else { return };
        let client = ctx.client();

        spawn_local(async move {
            let outcome = client.create_task(&title).await;
            match &outcome {
                Ok(task) => {
                    web_sys::console::log_1(&format!("[NewTaskForm] Created task #{}", task.id).into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[NewTaskForm] Create failed: {}", e).into());
                }
            }
            ctx.finish_submit(outcome);
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add new task..."
                prop:value=move || ctx.state.with(|s| s.draft.clone())
                on:input=move |ev| {
                    let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    else {
                        return;
                    };
                    ctx.state.update(|s| s.set_draft(input.value()));
                }
            />
            <button type="submit" disabled=move || !can_submit()>
                {move || if submitting() { "Adding…" } else { "Add Task" }}
            </button>
        </form>
    }
}
