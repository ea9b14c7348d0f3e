use reqwest::StatusCode;
use thiserror::Error;

/// Why a backend call failed
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, CORS rejection, aborted fetch...
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("backend returned {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}
