//! In-memory tracker.
//!
//! Holds projects, memberships and stories in a shared map and records every
//! write and every token it was opened with, so tests can assert on both.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::{TrackerError, TrackerResult};
use crate::resources::{
    MembershipResource, NewStory, PersonResource, ProjectResource, StoryFilter, StoryResource,
    StoryUpdate,
};
use crate::{Connect, Tracker};

#[derive(Default)]
struct State {
    projects: Vec<ProjectResource>,
    memberships: HashMap<u64, Vec<MembershipResource>>,
    stories: Vec<StoryResource>,
    updates: Vec<(u64, StoryUpdate)>,
    created: Vec<NewStory>,
    tokens: Vec<String>,
    next_id: u64,
}

/// Tracker backed by process memory. Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryTracker {
    state: Arc<Mutex<State>>,
}

impl InMemoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn with_project(self, id: u64, name: &str) -> Self {
        self.lock().projects.push(ProjectResource {
            id,
            name: name.to_string(),
            description: None,
        });
        self
    }

    pub fn with_member(self, project_id: u64, person: PersonResource) -> Self {
        {
            let mut state = self.lock();
            let members = state.memberships.entry(project_id).or_default();
            let id = members.len() as u64 + 1;
            members.push(MembershipResource {
                id,
                person,
                role: Some("member".to_string()),
            });
        }
        self
    }

    pub fn with_story(self, story: StoryResource) -> Self {
        {
            let mut state = self.lock();
            state.next_id = state.next_id.max(story.id);
            state.stories.push(story);
        }
        self
    }

    /// Current copy of a stored story.
    pub fn stored_story(&self, story_id: u64) -> Option<StoryResource> {
        self.lock().stories.iter().find(|s| s.id == story_id).cloned()
    }

    /// Every update applied so far, as `(story_id, update)`.
    pub fn updates(&self) -> Vec<(u64, StoryUpdate)> {
        self.lock().updates.clone()
    }

    /// Every story created so far.
    pub fn created(&self) -> Vec<NewStory> {
        self.lock().created.clone()
    }

    /// Tokens passed to [`Connect::connect`].
    pub fn tokens(&self) -> Vec<String> {
        self.lock().tokens.clone()
    }
}

fn matches_filter(story: &StoryResource, filter: &StoryFilter) -> bool {
    filter.states.is_empty() || filter.states.iter().any(|s| *s == story.current_state)
}

#[async_trait]
impl Tracker for InMemoryTracker {
    async fn projects(&self) -> TrackerResult<Vec<ProjectResource>> {
        Ok(self.lock().projects.clone())
    }

    async fn project(&self, project_id: u64) -> TrackerResult<ProjectResource> {
        self.lock()
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .cloned()
            .ok_or_else(|| TrackerError::NotFound(format!("/projects/{}", project_id)))
    }

    async fn memberships(&self, project_id: u64) -> TrackerResult<Vec<MembershipResource>> {
        Ok(self
            .lock()
            .memberships
            .get(&project_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn stories(
        &self,
        project_id: u64,
        filter: &StoryFilter,
    ) -> TrackerResult<Vec<StoryResource>> {
        Ok(self
            .lock()
            .stories
            .iter()
            .filter(|s| s.project_id == project_id && matches_filter(s, filter))
            .cloned()
            .collect())
    }

    async fn story(&self, project_id: u64, story_id: u64) -> TrackerResult<Option<StoryResource>> {
        Ok(self
            .lock()
            .stories
            .iter()
            .find(|s| s.project_id == project_id && s.id == story_id)
            .cloned())
    }

    async fn update_story(
        &self,
        project_id: u64,
        story_id: u64,
        update: &StoryUpdate,
    ) -> TrackerResult<StoryResource> {
        let mut state = self.lock();
        let story = state
            .stories
            .iter_mut()
            .find(|s| s.project_id == project_id && s.id == story_id)
            .ok_or_else(|| {
                TrackerError::NotFound(format!("/projects/{}/stories/{}", project_id, story_id))
            })?;

        if let Some(new_state) = &update.current_state {
            story.current_state = new_state.clone();
        }
        let updated = story.clone();
        state.updates.push((story_id, update.clone()));
        Ok(updated)
    }

    async fn create_story(
        &self,
        project_id: u64,
        story: &NewStory,
    ) -> TrackerResult<StoryResource> {
        let mut state = self.lock();
        if !state.projects.iter().any(|p| p.id == project_id) {
            return Err(TrackerError::NotFound(format!("/projects/{}", project_id)));
        }

        state.next_id += 1;
        let created = StoryResource {
            id: state.next_id,
            project_id,
            name: story.name.clone(),
            description: story.description.clone(),
            estimate: None,
            current_state: "unscheduled".to_string(),
            story_type: story.story_type.clone(),
            owner_ids: Vec::new(),
            requested_by_id: story.requested_by_id,
            url: None,
        };
        state.stories.push(created.clone());
        state.created.push(story.clone());
        Ok(created)
    }
}

impl Connect for InMemoryTracker {
    fn connect(&self, token: &str) -> TrackerResult<Arc<dyn Tracker>> {
        self.lock().tokens.push(token.to_string());
        Ok(Arc::new(self.clone()))
    }
}
