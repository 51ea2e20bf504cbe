//! Centralized error types for Swimlanes.

use swimlanes_tracker::TrackerError;
use thiserror::Error;

/// Main error type for Swimlanes operations.
#[derive(Error, Debug)]
pub enum SwimError {
    #[error("Project not found: {0}")]
    ProjectNotFound(u64),

    #[error("Story not found: {0}")]
    StoryNotFound(u64),

    #[error("Unknown transition: '{state}' has no next state")]
    UnknownTransition { state: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tracker error: {0}")]
    Tracker(#[from] TrackerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for Swimlanes operations.
pub type SwimResult<T> = Result<T, SwimError>;

impl SwimError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Whether the error refers to a project or story the tracker does not have.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::ProjectNotFound(_) | Self::StoryNotFound(_) => true,
            Self::Tracker(e) => e.is_not_found(),
            _ => false,
        }
    }
}
