//! Story lookup and workflow transitions.

pub mod model;
pub mod transition;

use swimlanes_tracker::{StoryFilter, StoryUpdate, Tracker};
use tracing::info;

use crate::error::{SwimError, SwimResult};
use crate::member::Member;
use model::{Story, WorkflowState};
pub use transition::{next_state, Transition};

/// Get a story by ID.
pub async fn get_story(
    tracker: &dyn Tracker,
    project_id: u64,
    story_id: u64,
    members: &[Member],
) -> SwimResult<Story> {
    tracker
        .story(project_id, story_id)
        .await?
        .map(|resource| Story::from_resource(resource, members))
        .ok_or(SwimError::StoryNotFound(story_id))
}

/// List the stories of a project that sit in one of the board lanes.
pub async fn list_lane_stories(
    tracker: &dyn Tracker,
    project_id: u64,
    members: &[Member],
) -> SwimResult<Vec<Story>> {
    let filter = StoryFilter::states(WorkflowState::LANES.iter().map(|s| s.as_str()));
    let resources = tracker.stories(project_id, &filter).await?;
    Ok(resources
        .into_iter()
        .map(|r| Story::from_resource(r, members))
        .collect())
}

/// Move a story one step forward in the workflow and persist it.
///
/// The next state is computed before the tracker is written to, so a story
/// without a transition is never touched.
pub async fn advance_story(
    tracker: &dyn Tracker,
    project_id: u64,
    story_id: u64,
) -> SwimResult<Transition> {
    let story = get_story(tracker, project_id, story_id, &[]).await?;

    let from = story
        .current_state
        .ok_or_else(|| SwimError::UnknownTransition {
            state: story.raw_state.clone(),
        })?;
    let to = next_state(from, story.story_type)?;

    info!(
        story_id,
        from = %from,
        to = %to,
        "transitioning story"
    );
    tracker
        .update_story(project_id, story_id, &StoryUpdate::state(to.as_str()))
        .await?;

    Ok(Transition { story_id, from, to })
}

/// Flag a story as blocked.
///
/// Only checks that the story exists; nothing is written to the tracker.
pub async fn mark_blocked(tracker: &dyn Tracker, project_id: u64, story_id: u64) -> SwimResult<()> {
    get_story(tracker, project_id, story_id, &[]).await?;
    Ok(())
}
