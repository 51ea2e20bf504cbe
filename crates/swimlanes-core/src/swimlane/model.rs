//! Swimlane domain models.

use serde::Serialize;

use crate::member::Member;
use crate::project::Project;
use crate::story::model::{Story, WorkflowState};

/// Stories of one developer in one workflow state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lane {
    pub state: WorkflowState,
    pub stories: Vec<Story>,
}

/// A project member with the stories they own, bucketed by state.
///
/// Built once by the grouper; all totals are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Developer {
    pub member: Member,
    /// One lane per [`WorkflowState::ALL`] entry, in that order.
    pub lanes: Vec<Lane>,
    pub story_count: usize,
    pub points_total: f64,
    pub points_left: f64,
    /// Hex SHA-256 of the normalized email.
    pub email_hash: String,
    pub nickname: Option<String>,
    pub avatar_url: String,
}

impl Developer {
    pub fn stories_in(&self, state: WorkflowState) -> &[Story] {
        self.lanes
            .get(state.index())
            .map(|lane| lane.stories.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_stories(&self) -> bool {
        self.story_count > 0
    }

    /// Nickname when configured, member name otherwise.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.member.name)
    }

    /// Length of the longest lane among `states`.
    pub fn deepest_lane(&self, states: &[WorkflowState]) -> usize {
        states
            .iter()
            .map(|s| self.stories_in(*s).len())
            .max()
            .unwrap_or(0)
    }
}

/// Per-developer grouping of a project's stories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swimlanes {
    /// Developers in member-list order, including those without stories.
    pub developers: Vec<Developer>,
    /// Lane states to show as columns.
    pub columns: Vec<WorkflowState>,
    /// Stories whose owner is not a project member.
    pub unassigned: Vec<Story>,
}

impl Swimlanes {
    /// Developers that own at least one story.
    pub fn developers_with_stories(&self) -> impl Iterator<Item = &Developer> {
        self.developers.iter().filter(|d| d.has_stories())
    }
}

/// A project together with its swimlanes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectBoard {
    pub project: Project,
    pub swimlanes: Swimlanes,
}
