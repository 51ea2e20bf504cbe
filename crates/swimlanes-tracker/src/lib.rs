//! Swimlanes Tracker Client
//!
//! Typed access to the Pivotal Tracker REST API (v5): projects, memberships
//! and stories. Everything above this crate talks to the tracker through the
//! [`Tracker`] trait so handlers can be exercised without the network.

pub mod client;
pub mod error;
#[cfg(feature = "memory")]
pub mod memory;
pub mod resources;

use std::sync::Arc;

use async_trait::async_trait;

pub use client::{HttpConnector, TrackerClient, DEFAULT_BASE_URL};
pub use error::{TrackerError, TrackerResult};
pub use resources::{
    MembershipResource, NewStory, PersonResource, ProjectResource, StoryFilter, StoryResource,
    StoryUpdate,
};

/// Read and write operations the dashboard needs from the tracker.
#[async_trait]
pub trait Tracker: Send + Sync {
    /// All projects visible to the token.
    async fn projects(&self) -> TrackerResult<Vec<ProjectResource>>;

    async fn project(&self, project_id: u64) -> TrackerResult<ProjectResource>;

    async fn memberships(&self, project_id: u64) -> TrackerResult<Vec<MembershipResource>>;

    /// Stories of a project matching `filter`, across all result pages.
    async fn stories(
        &self,
        project_id: u64,
        filter: &StoryFilter,
    ) -> TrackerResult<Vec<StoryResource>>;

    /// A single story, or `None` when the tracker does not know it.
    async fn story(&self, project_id: u64, story_id: u64) -> TrackerResult<Option<StoryResource>>;

    async fn update_story(
        &self,
        project_id: u64,
        story_id: u64,
        update: &StoryUpdate,
    ) -> TrackerResult<StoryResource>;

    async fn create_story(&self, project_id: u64, story: &NewStory) -> TrackerResult<StoryResource>;
}

/// Builds a [`Tracker`] bound to one API token.
///
/// The web server holds a connector and opens a tracker per request, since
/// every browser session may carry its own token.
pub trait Connect: Send + Sync {
    fn connect(&self, token: &str) -> TrackerResult<Arc<dyn Tracker>>;
}
