//! Grouping stories into per-developer swimlanes.

pub mod model;

use sha2::{Digest, Sha256};
use swimlanes_tracker::Tracker;
use tracing::debug;

use crate::config::{normalize_email, DisplayConfig};
use crate::error::SwimResult;
use crate::member::{self, Member};
use crate::project;
use crate::story::{self, model::Story, model::WorkflowState};
pub use model::{Developer, Lane, ProjectBoard, Swimlanes};

const GRAVATAR_URL: &str = "https://www.gravatar.com/avatar";

/// Group `stories` into one swimlane per member.
///
/// A story belongs to the member whose name equals its `owned_by`. Stories
/// owned by anyone else end up in [`Swimlanes::unassigned`]. Stories whose
/// state is outside the workflow count toward a developer's totals but land in
/// no lane.
pub fn group(stories: &[Story], members: &[Member], display: &DisplayConfig) -> Swimlanes {
    let developers = members
        .iter()
        .map(|m| {
            let owned: Vec<&Story> = stories
                .iter()
                .filter(|s| s.owned_by.as_deref() == Some(m.name.as_str()))
                .collect();
            build_developer(m, &owned, display)
        })
        .collect();

    let unassigned = stories
        .iter()
        .filter(|s| match &s.owned_by {
            Some(owner) => !members.iter().any(|m| m.name == *owner),
            None => true,
        })
        .cloned()
        .collect();

    Swimlanes {
        developers,
        columns: visible_columns(stories),
        unassigned,
    }
}

fn build_developer(member: &Member, stories: &[&Story], display: &DisplayConfig) -> Developer {
    let mut lanes: Vec<Lane> = WorkflowState::ALL
        .iter()
        .map(|state| Lane {
            state: *state,
            stories: Vec::new(),
        })
        .collect();

    let mut points_total = 0.0;
    let mut points_left = 0.0;
    for story in stories {
        points_total += story.points();
        if story.is_active() {
            points_left += story.points();
        }
        if let Some(state) = story.current_state {
            lanes[state.index()].stories.push((*story).clone());
        }
    }

    let email_hash = email_hash(&member.email);
    let avatar_url = display
        .avatar(&member.email)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}/{}", GRAVATAR_URL, email_hash));

    Developer {
        member: member.clone(),
        lanes,
        story_count: stories.len(),
        points_total,
        points_left,
        email_hash,
        nickname: display.nickname(&member.email).map(str::to_string),
        avatar_url,
    }
}

/// Lane states to display: conditional columns only when a story is in them.
pub fn visible_columns(stories: &[Story]) -> Vec<WorkflowState> {
    WorkflowState::LANES
        .iter()
        .copied()
        .filter(|state| {
            !state.is_conditional() || stories.iter().any(|s| s.current_state == Some(*state))
        })
        .collect()
}

/// Hex SHA-256 of the trimmed, lowercased email.
pub fn email_hash(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize_email(email).as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Fetch a project's members and lane stories and group them.
pub async fn load_swimlanes(
    tracker: &dyn Tracker,
    project_id: u64,
    display: &DisplayConfig,
) -> SwimResult<ProjectBoard> {
    let project = project::get_project(tracker, project_id).await?;
    let members = member::list_members(tracker, project_id).await?;
    let stories = story::list_lane_stories(tracker, project_id, &members).await?;

    debug!(
        project_id,
        members = members.len(),
        stories = stories.len(),
        "grouping swimlanes"
    );

    Ok(ProjectBoard {
        project,
        swimlanes: group(&stories, &members, display),
    })
}
