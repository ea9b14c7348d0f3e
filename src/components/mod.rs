//! UI Components
//!
//! Leptos components of the task list view.

mod new_task_form;
mod task_list;
mod task_row;
mod error_banner;

pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use error_banner::ErrorBanner;
