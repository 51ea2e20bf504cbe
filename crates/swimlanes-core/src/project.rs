//! Tracker projects.

use serde::Serialize;
use swimlanes_tracker::{ProjectResource, Tracker, TrackerError};

use crate::error::{SwimError, SwimResult};

/// A tracker project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
}

impl Project {
    pub fn from_resource(resource: ProjectResource) -> Self {
        Self {
            id: resource.id,
            name: resource.name,
            description: resource.description,
        }
    }
}

/// Get a project by ID.
pub async fn get_project(tracker: &dyn Tracker, project_id: u64) -> SwimResult<Project> {
    match tracker.project(project_id).await {
        Ok(resource) => Ok(Project::from_resource(resource)),
        Err(TrackerError::NotFound(_)) => Err(SwimError::ProjectNotFound(project_id)),
        Err(e) => Err(e.into()),
    }
}

/// List all projects visible to the tracker token.
pub async fn list_projects(tracker: &dyn Tracker) -> SwimResult<Vec<Project>> {
    let resources = tracker.projects().await?;
    Ok(resources.into_iter().map(Project::from_resource).collect())
}
