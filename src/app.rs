//! Task List Frontend App
//!
//! Root component: loads tasks once on mount and lays out the view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorBanner, NewTaskForm, TaskList};
use crate::config::ApiConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(ApiConfig::default());
    provide_context(ctx);

    // Load tasks on mount
    Effect::new(move |_| {
        let client = ctx.client();
        web_sys::console::log_1(&"[App] Loading tasks".into());
        spawn_local(async move {
            let outcome = client.list_tasks().await;
            match &outcome {
                Ok(tasks) => {
                    web_sys::console::log_1(&format!("[App] Loaded {} tasks", tasks.len()).into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[App] Error fetching tasks: {}", e).into());
                }
            }
            ctx.finish_load(outcome);
        });
    });

    view! {
        <main class="app-layout">
            <h1>"Task Manager"</h1>

            <ErrorBanner />

            <NewTaskForm />

            <h2>"Tasks:"</h2>
            <TaskList />

            <p class="task-count">{move || ctx.state.with(|s| s.summary())}</p>
        </main>
    }
}
