//! Error responses.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use swimlanes_core::SwimError;
use tracing::{error, warn};

/// Errors surfaced by route handlers.
#[derive(Debug)]
pub enum WebError {
    /// No token in the session and none configured.
    MissingToken,
    Swim(SwimError),
    Template(askama::Error),
}

impl From<SwimError> for WebError {
    fn from(e: SwimError) -> Self {
        Self::Swim(e)
    }
}

impl From<askama::Error> for WebError {
    fn from(e: askama::Error) -> Self {
        Self::Template(e)
    }
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::Swim(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Swim(SwimError::UnknownTransition { .. }) => StatusCode::CONFLICT,
            Self::Swim(SwimError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            Self::Swim(SwimError::Tracker(_)) => StatusCode::BAD_GATEWAY,
            Self::Swim(_) | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::MissingToken => {
                "No tracker token. Open the dashboard with ?token=<your API token>.".to_string()
            }
            Self::Swim(e) => e.to_string(),
            Self::Template(e) => format!("Template error: {}", e),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    reason: String,
    message: String,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            error!(status = status.as_u16(), %message, "request failed");
        } else {
            warn!(status = status.as_u16(), %message, "request rejected");
        }

        let page = ErrorTemplate {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error").to_string(),
            message: message.clone(),
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(_) => (status, message).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swimlanes_tracker::TrackerError;

    #[test]
    fn status_codes() {
        assert_eq!(WebError::MissingToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            WebError::from(SwimError::StoryNotFound(1)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebError::from(SwimError::Tracker(TrackerError::NotFound("/x".into()))).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebError::from(SwimError::UnknownTransition {
                state: "accepted".into()
            })
            .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            WebError::from(SwimError::validation("empty")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebError::from(SwimError::Tracker(TrackerError::Api {
                status: 500,
                message: "boom".into()
            }))
            .status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
