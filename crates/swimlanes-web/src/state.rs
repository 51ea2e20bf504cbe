//! Application state.

use std::sync::Arc;

use swimlanes_core::config::{DisplayConfig, SwimlanesConfig};
use swimlanes_core::SwimError;
use swimlanes_tracker::{Connect, Tracker};

use crate::error::WebError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SwimlanesConfig>,
    pub display: Arc<DisplayConfig>,
    pub connector: Arc<dyn Connect>,
}

impl AppState {
    pub fn new(config: SwimlanesConfig, connector: Arc<dyn Connect>) -> Self {
        let display = config.display();
        Self {
            config: Arc::new(config),
            display: Arc::new(display),
            connector,
        }
    }

    /// Open a tracker with the session token, falling back to the configured one.
    pub fn tracker(&self, session_token: Option<&str>) -> Result<Arc<dyn Tracker>, WebError> {
        let token = session_token
            .or(self.config.token.as_deref())
            .filter(|t| !t.is_empty())
            .ok_or(WebError::MissingToken)?;
        self.connector
            .connect(token)
            .map_err(|e| WebError::Swim(SwimError::from(e)))
    }
}
