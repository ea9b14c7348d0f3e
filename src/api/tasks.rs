//! Task Endpoints
//!
//! `GET /tasks` and `POST /tasks`. No retries, no timeout.

use reqwest::Response;

use super::ApiError;
use crate::config::ApiConfig;
use crate::models::{NewTask, Task, TaskTitle};

#[derive(Debug, Clone)]
pub struct TaskClient {
    http: reqwest::Client,
    tasks_url: String,
}

impl TaskClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            tasks_url: config.tasks_url(),
        }
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = self.http.get(&self.tasks_url).send().await.map_err(ApiError::Request)?;
        let response = ensure_success(response)?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Create a task; the backend assigns `id` and `completed`.
    pub async fn create_task(&self, title: &TaskTitle) -> Result<Task, ApiError> {
        let body = NewTask { title: title.as_str() };
        let response = self
            .http
            .post(&self.tasks_url)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::Request)?;
        let response = ensure_success(response)?;
        response.json().await.map_err(ApiError::Decode)
    }
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status))
    }
}
