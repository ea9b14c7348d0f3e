//! Task List State
//!
//! Everything the view displays, plus the transitions applied when
//! requests start and finish. Held in a signal by `AppContext`.

use crate::api::ApiError;
use crate::models::{Task, TaskTitle};

pub const LOAD_FAILED_MESSAGE: &str = "Could not load tasks. Is the backend running?";
pub const CREATE_FAILED_MESSAGE: &str = "Could not create the task. Please try again.";
pub const LOADING_PLACEHOLDER: &str = "Loading tasks…";
pub const EMPTY_PLACEHOLDER: &str = "No tasks yet.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskListState {
    /// Tasks in display order
    pub tasks: Vec<Task>,
    /// Contents of the title input
    pub draft: String,
    /// Initial read still pending
    pub loading: bool,
    /// Create request in flight
    pub submitting: bool,
    pub error: Option<String>,
}

impl TaskListState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    pub fn finish_load(&mut self, outcome: Result<Vec<Task>, ApiError>) {
        match outcome {
            Ok(tasks) => self.tasks = tasks,
            Err(_) => {
                self.tasks.clear();
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Start a submission from the current draft.
    ///
    /// Returns `None` when nothing should be sent: the draft is blank, the
    /// initial read has not resolved, or a previous submission is in flight.
    pub fn begin_submit(&mut self) -> Option<TaskTitle> {
        if self.loading || self.submitting {
            return None;
        }
        let title = TaskTitle::parse(&self.draft).ok()?;
        self.submitting = true;
        Some(title)
    }

    pub fn finish_submit(&mut self, outcome: Result<Task, ApiError>) {
        match outcome {
            Ok(task) => {
                self.tasks.push(task);
                self.draft.clear();
                self.error = None;
            }
            Err(_) => self.error = Some(CREATE_FAILED_MESSAGE.to_string()),
        }
        self.submitting = false;
    }

    /// Whether the submit control accepts input
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.submitting
    }

    /// Message shown in place of the list, `None` when there are rows to show
    pub fn placeholder(&self) -> Option<&'static str> {
        if self.loading {
            Some(LOADING_PLACEHOLDER)
        } else if self.tasks.is_empty() {
            Some(EMPTY_PLACEHOLDER)
        } else {
            None
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Footer text, e.g. `3 tasks, 1 done`
    pub fn summary(&self) -> String {
        let done = self.tasks.iter().filter(|t| t.completed).count();
        match self.tasks.len() {
            1 => format!("1 task, {} done", done),
            n => format!("{} tasks, {} done", n, done),
        }
    }
}
