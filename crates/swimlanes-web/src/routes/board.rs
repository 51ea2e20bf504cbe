//! Swimlane board page.

use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};
use swimlanes_core::swimlane;

use crate::error::WebError;
use crate::session::SessionToken;
use crate::state::AppState;
use crate::views::BoardTemplate;

/// GET /project/{project_id} - Render the swimlanes of a project.
pub async fn show_board(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path(project_id): Path<u64>,
) -> Result<Html<String>, WebError> {
    let tracker = state.tracker(token.as_deref())?;
    let board = swimlane::load_swimlanes(tracker.as_ref(), project_id, &state.display).await?;

    let template = BoardTemplate::from_board(&board);
    Ok(Html(template.render()?))
}
