//! Story domain models.

use std::fmt;

use serde::{Deserialize, Serialize};
use swimlanes_tracker::StoryResource;

use crate::member::{self, Member};

/// A tracker story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    pub id: u64,
    pub project_id: u64,
    pub name: String,
    pub description: Option<String>,
    pub estimate: Option<f64>,
    /// `None` when the tracker state is outside [`WorkflowState`].
    pub current_state: Option<WorkflowState>,
    /// State as reported by the tracker.
    pub raw_state: String,
    pub owned_by: Option<String>,
    pub story_type: StoryType,
    pub url: Option<String>,
}

impl Story {
    /// Create a Story from a tracker resource, resolving the first owner to a
    /// member name.
    pub fn from_resource(resource: StoryResource, members: &[Member]) -> Self {
        let owned_by = resource
            .owner_ids
            .first()
            .and_then(|id| member::name_of(members, *id))
            .map(str::to_string);

        Self {
            id: resource.id,
            project_id: resource.project_id,
            name: resource.name,
            description: resource.description,
            estimate: resource.estimate,
            current_state: WorkflowState::parse(&resource.current_state),
            raw_state: resource.current_state,
            owned_by,
            story_type: StoryType::from_str(&resource.story_type),
            url: resource.url,
        }
    }

    /// Estimate in points, zero when unestimated. Negative estimates count as zero.
    pub fn points(&self) -> f64 {
        self.estimate.map_or(0.0, |e| e.max(0.0))
    }

    pub fn is_active(&self) -> bool {
        self.current_state.is_some_and(WorkflowState::is_active)
    }
}

/// Story workflow state.
///
/// Declaration order is the display order of the board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    Unstarted,
    Rejected,
    Started,
    Finished,
    Delivered,
    Accepted,
}

impl WorkflowState {
    pub const ALL: [Self; 6] = [
        Self::Unstarted,
        Self::Rejected,
        Self::Started,
        Self::Finished,
        Self::Delivered,
        Self::Accepted,
    ];

    /// States shown as board columns.
    pub const LANES: [Self; 5] = [
        Self::Unstarted,
        Self::Rejected,
        Self::Started,
        Self::Finished,
        Self::Delivered,
    ];

    /// States counted toward points remaining.
    pub const ACTIVE: [Self; 3] = [Self::Unstarted, Self::Rejected, Self::Started];

    /// Parse a tracker state name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "unstarted" => Some(Self::Unstarted),
            "rejected" => Some(Self::Rejected),
            "started" => Some(Self::Started),
            "finished" => Some(Self::Finished),
            "delivered" => Some(Self::Delivered),
            "accepted" => Some(Self::Accepted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unstarted => "unstarted",
            Self::Rejected => "rejected",
            Self::Started => "started",
            Self::Finished => "finished",
            Self::Delivered => "delivered",
            Self::Accepted => "accepted",
        }
    }

    pub fn is_active(self) -> bool {
        Self::ACTIVE.contains(&self)
    }

    /// Position in [`WorkflowState::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Columns hidden from the board when no story is in them.
    pub fn is_conditional(self) -> bool {
        matches!(self, Self::Rejected | Self::Delivered)
    }

    /// Verb for the button that moves a story into this state.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Unstarted => "Unstart",
            Self::Rejected => "Reject",
            Self::Started => "Start",
            Self::Finished => "Finish",
            Self::Delivered => "Deliver",
            Self::Accepted => "Accept",
        }
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Story type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryType {
    Feature,
    Bug,
    Chore,
    Release,
}

impl StoryType {
    /// Parse from string. Unknown types are treated as features.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "bug" => Self::Bug,
            "chore" => Self::Chore,
            "release" => Self::Release,
            _ => Self::Feature,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Bug => "bug",
            Self::Chore => "chore",
            Self::Release => "release",
        }
    }

    /// Chores skip the finished/delivered review steps.
    pub fn is_chore(&self) -> bool {
        matches!(self, Self::Chore)
    }
}
