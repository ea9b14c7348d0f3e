//! Task Row Component

use leptos::prelude::*;

use crate::models::Task;

/// A single `<li>` in the task list
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let class = if task.completed { "task-row completed" } else { "task-row" };

    view! {
        <li class=class data-task-id=task.id.to_string()>
            {task.display_line()}
        </li>
    }
}
