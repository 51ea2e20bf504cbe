//! Landing page and project list.

use askama::Template;
use axum::{extract::State, response::Html};
use swimlanes_core::project;

use crate::error::WebError;
use crate::session::SessionToken;
use crate::state::AppState;
use crate::views::{IndexTemplate, ProjectsTemplate};

/// GET / - Token form, or a link to the projects when a token is known.
pub async fn index(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Html<String>, WebError> {
    let template = IndexTemplate {
        has_token: token.is_some() || state.config.token.is_some(),
    };
    Ok(Html(template.render()?))
}

/// GET /project - List the projects visible to the token.
pub async fn list_projects(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Html<String>, WebError> {
    let tracker = state.tracker(token.as_deref())?;
    let projects = project::list_projects(tracker.as_ref()).await?;

    let template = ProjectsTemplate { projects };
    Ok(Html(template.render()?))
}
