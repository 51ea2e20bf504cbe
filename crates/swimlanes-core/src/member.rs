//! Project members.

use serde::Serialize;
use swimlanes_tracker::{MembershipResource, Tracker};

use crate::error::SwimResult;

/// A person on a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub initials: String,
    pub email: String,
    pub username: Option<String>,
    pub role: Option<String>,
}

impl Member {
    /// Create a Member from a tracker membership record.
    pub fn from_resource(resource: MembershipResource) -> Self {
        let person = resource.person;
        Self {
            id: person.id,
            name: person.name,
            initials: person.initials,
            email: person.email,
            username: person.username,
            role: resource.role,
        }
    }
}

/// List the members of a project, in tracker order.
pub async fn list_members(tracker: &dyn Tracker, project_id: u64) -> SwimResult<Vec<Member>> {
    let memberships = tracker.memberships(project_id).await?;
    Ok(memberships.into_iter().map(Member::from_resource).collect())
}

/// Display name of the member with `person_id`.
pub(crate) fn name_of(members: &[Member], person_id: u64) -> Option<&str> {
    members
        .iter()
        .find(|m| m.id == person_id)
        .map(|m| m.name.as_str())
}
