//! Tracker client error types.

use thiserror::Error;

/// Errors returned by the tracker client.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Tracker request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Tracker API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

impl TrackerError {
    /// Whether the tracker answered 404 for the requested resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
