//! Task List Component
//!
//! Loading placeholder, empty message, or one row per task.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_app_context;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();
    let placeholder = Memo::new(move |_| ctx.state.with(|s| s.placeholder()));

    move || match placeholder.get() {
        Some(message) => view! { <p class="task-list-status">{message}</p> }.into_any(),
        None => view! {
            <ul class="task-list">
                <For
                    each=move || ctx.state.with(|s| s.tasks.clone().into_iter().enumerate().collect::<Vec<_>>())
                    // The backend may hand out the same id twice
                    key=|(index, task)| (*index, task.id)
                    children=|(_, task)| view! { <TaskRow task=task /> }
                />
            </ul>
        }
        .into_any(),
    }
}
