//! Backend Configuration
//!
//! The backend address is compiled in; nothing is read from the environment.

/// Address the companion backend binds to.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";

/// Where the task backend lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: &'static str,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL }
    }
}

impl ApiConfig {
    /// Task collection endpoint (`{base_url}/tasks`)
    pub fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url.trim_end_matches('/'))
    }
}
