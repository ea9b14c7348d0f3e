//! Backend HTTP Bindings
//!
//! Frontend bindings to the task backend, organized by domain.

mod error;
mod tasks;

pub use error::ApiError;
pub use tasks::TaskClient;
