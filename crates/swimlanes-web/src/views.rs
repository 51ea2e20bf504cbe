//! Askama templates and their view models.

use askama::Template;
use swimlanes_core::project::Project;
use swimlanes_core::story::model::{Story, WorkflowState};
use swimlanes_core::story::next_state;
use swimlanes_core::swimlane::{Developer, ProjectBoard};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub has_token: bool,
}

#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub projects: Vec<Project>,
}

#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub project_id: u64,
    pub project_name: String,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<DeveloperRow>,
    pub unassigned: Vec<StoryCard>,
}

#[derive(Template)]
#[template(path = "bug.html")]
pub struct BugTemplate {
    pub project_id: u64,
    pub project_name: String,
    pub submitters: Vec<SubmitterOption>,
}

pub struct ColumnHeader {
    pub name: &'static str,
    pub count: usize,
}

/// One developer's row on the board.
pub struct DeveloperRow {
    pub display_name: String,
    pub full_name: String,
    pub avatar_url: String,
    pub points_left: f64,
    pub points_total: f64,
    pub story_count: usize,
    pub cells: Vec<Vec<StoryCard>>,
}

/// A story as rendered in a cell.
pub struct StoryCard {
    pub id: u64,
    pub anchor: String,
    pub name: String,
    pub story_type: &'static str,
    pub estimate: String,
    pub url: String,
    /// Empty when the story has no next state.
    pub next_label: String,
}

pub struct SubmitterOption {
    pub key: String,
    pub label: String,
}

/// Anchor id of a story card, used to scroll back after a transition.
pub fn story_anchor(story_id: u64) -> String {
    format!("story-{}", story_id)
}

impl StoryCard {
    pub fn from_story(story: &Story) -> Self {
        let next_label = story
            .current_state
            .and_then(|state| next_state(state, story.story_type).ok())
            .map(|to| to.action_label().to_string())
            .unwrap_or_default();

        Self {
            id: story.id,
            anchor: story_anchor(story.id),
            name: story.name.clone(),
            story_type: story.story_type.as_str(),
            estimate: story.estimate.map(|e| e.to_string()).unwrap_or_default(),
            url: story.url.clone().unwrap_or_default(),
            next_label,
        }
    }
}

impl DeveloperRow {
    fn from_developer(dev: &Developer, columns: &[WorkflowState]) -> Self {
        Self {
            display_name: dev.display_name().to_string(),
            full_name: dev.member.name.clone(),
            avatar_url: dev.avatar_url.clone(),
            points_left: dev.points_left,
            points_total: dev.points_total,
            story_count: dev.story_count,
            cells: columns
                .iter()
                .map(|state| dev.stories_in(*state).iter().map(StoryCard::from_story).collect())
                .collect(),
        }
    }
}

impl BoardTemplate {
    pub fn from_board(board: &ProjectBoard) -> Self {
        let lanes = &board.swimlanes;
        let columns = lanes
            .columns
            .iter()
            .map(|state| ColumnHeader {
                name: state.as_str(),
                count: lanes
                    .developers
                    .iter()
                    .map(|d| d.stories_in(*state).len())
                    .sum(),
            })
            .collect();

        Self {
            project_id: board.project.id,
            project_name: board.project.name.clone(),
            columns,
            rows: lanes
                .developers
                .iter()
                .map(|d| DeveloperRow::from_developer(d, &lanes.columns))
                .collect(),
            unassigned: lanes.unassigned.iter().map(StoryCard::from_story).collect(),
        }
    }
}
