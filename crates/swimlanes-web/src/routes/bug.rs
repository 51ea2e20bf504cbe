//! Bug report form.

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use swimlanes_core::bug::{self, BugReport};
use swimlanes_core::project;

use crate::error::WebError;
use crate::routes::stories::board_location;
use crate::session::SessionToken;
use crate::state::AppState;
use crate::views::{BugTemplate, SubmitterOption};

/// GET /project/{project_id}/bug - Render the bug form.
pub async fn bug_form(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path(project_id): Path<u64>,
) -> Result<Html<String>, WebError> {
    let tracker = state.tracker(token.as_deref())?;
    let project = project::get_project(tracker.as_ref(), project_id).await?;

    let submitters = state
        .config
        .users
        .iter()
        .map(|(key, user)| SubmitterOption {
            key: key.clone(),
            label: user.nickname.clone().unwrap_or_else(|| key.clone()),
        })
        .collect();

    let template = BugTemplate {
        project_id: project.id,
        project_name: project.name,
        submitters,
    };
    Ok(Html(template.render()?))
}

/// POST /project/{project_id}/bug - File the bug and return to the board.
pub async fn create_bug(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path(project_id): Path<u64>,
    Form(report): Form<BugReport>,
) -> Result<Redirect, WebError> {
    let tracker = state.tracker(token.as_deref())?;
    bug::file_bug(tracker.as_ref(), project_id, &report, &state.config).await?;

    Ok(Redirect::to(&board_location(project_id, None)))
}
