//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn status_label(&self) -> &'static str {
        if self.completed { "✔️ Done" } else { "⏳ Pending" }
    }

    /// One list entry, e.g. `Buy milk — ⏳ Pending`
    pub fn display_line(&self) -> String {
        format!("{} — {}", self.title, self.status_label())
    }
}

/// Body of `POST /tasks`
#[derive(Debug, Serialize)]
pub struct NewTask<'a> {
    pub title: &'a str,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("task title must not be empty")]
pub struct EmptyTitleError;

/// A task title that is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTitle(String);

impl TaskTitle {
    pub fn parse(raw: &str) -> Result<Self, EmptyTitleError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Err(EmptyTitleError)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: i64, title: &str, completed: bool) -> Task {
        Task { id, title: title.to_string(), completed }
    }

    #[test]
    fn test_display_line_pending() {
        assert_eq!(make_task(1, "A", false).display_line(), "A — ⏳ Pending");
    }

    #[test]
    fn test_display_line_done() {
        assert_eq!(make_task(3, "Ship it", true).display_line(), "Ship it — ✔️ Done");
    }

    #[test]
    fn test_task_deserializes_from_backend_json() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[{"id":1,"title":"Learn Rust","completed":false},{"id":2,"title":"Build","completed":true}]"#,
        )
        .unwrap();

        assert_eq!(tasks, vec![make_task(1, "Learn Rust", false), make_task(2, "Build", true)]);
    }

    #[test]
    fn test_task_accepts_negative_id() {
        let task: Task = serde_json::from_str(r#"{"id":-5,"title":"Odd","completed":false}"#).unwrap();
        assert_eq!(task.id, -5);
    }

    #[test]
    fn test_new_task_body_only_carries_title() {
        let body = serde_json::to_value(NewTask { title: "Buy milk" }).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "Buy milk" }));
    }

    #[test]
    fn test_title_rejects_blank() {
        assert_eq!(TaskTitle::parse(""), Err(EmptyTitleError));
        assert_eq!(TaskTitle::parse("   \t\n"), Err(EmptyTitleError));
    }

    #[test]
    fn test_title_is_trimmed() {
        let title = TaskTitle::parse("  Buy milk ").unwrap();
        assert_eq!(title.as_str(), "Buy milk");
    }
}
