//! Story transition handlers.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::Redirect,
    Form,
};
use serde::Deserialize;
use swimlanes_core::story;

use crate::error::WebError;
use crate::session::SessionToken;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StoryActionForm {
    /// Element id to scroll back to after the redirect.
    #[serde(default)]
    pub anchor: Option<String>,
}

/// Anchor from the posted form. A bare POST without a form body has none.
fn form_anchor(form: Result<Form<StoryActionForm>, FormRejection>) -> Option<String> {
    form.ok().and_then(|Form(form)| form.anchor)
}

/// Board URL, scrolled to `anchor` when it is a plain element id.
pub fn board_location(project_id: u64, anchor: Option<&str>) -> String {
    let anchor = anchor
        .filter(|a| !a.is_empty())
        .filter(|a| a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));

    match anchor {
        Some(anchor) => format!("/project/{}#{}", project_id, anchor),
        None => format!("/project/{}", project_id),
    }
}

/// POST /project/{project_id}/stories/{story_id}/next - Advance a story.
pub async fn next_state(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path((project_id, story_id)): Path<(u64, u64)>,
    form: Result<Form<StoryActionForm>, FormRejection>,
) -> Result<Redirect, WebError> {
    let tracker = state.tracker(token.as_deref())?;
    story::advance_story(tracker.as_ref(), project_id, story_id).await?;

    let anchor = form_anchor(form);
    Ok(Redirect::to(&board_location(project_id, anchor.as_deref())))
}

/// POST /project/{project_id}/stories/{story_id}/blocked - Flag a story as blocked.
pub async fn blocked(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path((project_id, story_id)): Path<(u64, u64)>,
    form: Result<Form<StoryActionForm>, FormRejection>,
) -> Result<Redirect, WebError> {
    let tracker = state.tracker(token.as_deref())?;
    story::mark_blocked(tracker.as_ref(), project_id, story_id).await?;

    let anchor = form_anchor(form);
    Ok(Redirect::to(&board_location(project_id, anchor.as_deref())))
}
