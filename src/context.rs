//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{ApiError, TaskClient};
use crate::config::ApiConfig;
use crate::models::{Task, TaskTitle};
use crate::state::TaskListState;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Everything the task list view displays
    pub state: RwSignal<TaskListState>,
    api: ApiConfig,
}

impl AppContext {
    pub fn new(api: ApiConfig) -> Self {
        Self {
            state: RwSignal::new(TaskListState::new()),
            api,
        }
    }

    pub fn client(&self) -> TaskClient {
        TaskClient::new(self.api)
    }

    /// Apply the result of the initial read.
    ///
    /// Does nothing once the view has been torn down.
    pub fn finish_load(&self, outcome: Result<Vec<Task>, ApiError>) {
        self.state.try_update(|s| s.finish_load(outcome));
    }

    /// Claim the draft for submission, `None` if nothing should be sent
    pub fn begin_submit(&self) -> Option<TaskTitle> {
        self.state.try_update(|s| s.begin_submit()).flatten()
    }

    pub fn finish_submit(&self, outcome: Result<Task, ApiError>) {
        self.state.try_update(|s| s.finish_submit(outcome));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
