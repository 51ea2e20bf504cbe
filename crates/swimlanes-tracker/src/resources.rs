//! Wire representations of tracker resources.
//!
//! These mirror the JSON the tracker sends and accepts. Domain conversion
//! happens in `swimlanes-core`.

use serde::{Deserialize, Serialize};

/// A tracker project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectResource {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A person participating in a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonResource {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Project membership record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipResource {
    #[serde(default)]
    pub id: u64,
    pub person: PersonResource,
    #[serde(default)]
    pub role: Option<String>,
}

/// A story as returned by the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryResource {
    pub id: u64,
    pub project_id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub estimate: Option<f64>,
    pub current_state: String,
    pub story_type: String,
    #[serde(default)]
    pub owner_ids: Vec<u64>,
    #[serde(default)]
    pub requested_by_id: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Partial story update (`PUT /projects/{id}/stories/{story_id}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_state: Option<String>,
}

impl StoryUpdate {
    pub fn state(state: impl Into<String>) -> Self {
        Self {
            current_state: Some(state.into()),
        }
    }
}

/// Fields for a new story (`POST /projects/{id}/stories`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub story_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by_id: Option<u64>,
}

/// Story search filter, rendered into the tracker's `filter` query syntax.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryFilter {
    pub states: Vec<String>,
}

impl StoryFilter {
    /// Filter on a set of states.
    pub fn states<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            states: states.into_iter().map(Into::into).collect(),
        }
    }

    /// Render as a tracker search expression, e.g. `state:started,finished`.
    pub fn to_query(&self) -> String {
        if self.states.is_empty() {
            String::new()
        } else {
            format!("state:{}", self.states.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_query_lists_states() {
        let filter = StoryFilter::states(["unstarted", "started"]);
        assert_eq!(filter.to_query(), "state:unstarted,started");
    }

    #[test]
    fn empty_filter_renders_empty_query() {
        assert_eq!(StoryFilter::default().to_query(), "");
    }

    #[test]
    fn story_defaults_missing_optional_fields() {
        let json = r#"{
            "id": 7,
            "project_id": 99,
            "name": "Fix login",
            "current_state": "started",
            "story_type": "bug"
        }"#;
        let story: StoryResource = serde_json::from_str(json).unwrap();
        assert_eq!(story.estimate, None);
        assert!(story.owner_ids.is_empty());
        assert_eq!(story.url, None);
    }

    #[test]
    fn story_estimate_accepts_any_json_number() {
        for (raw, expected) in [("2", 2.0), ("2.0", 2.0), ("0.5", 0.5)] {
            let json = r#"{"id": 1, "project_id": 2, "name": "n", "estimate": ESTIMATE,
                "current_state": "started", "story_type": "feature"}"#
                .replace("ESTIMATE", raw);
            let story: StoryResource = serde_json::from_str(&json).unwrap();
            assert_eq!(story.estimate, Some(expected));
        }
    }

    #[test]
    fn update_omits_unset_fields() {
        let body = serde_json::to_value(StoryUpdate::default()).unwrap();
        assert_eq!(body, serde_json::json!({}));

        let body = serde_json::to_value(StoryUpdate::state("finished")).unwrap();
        assert_eq!(body, serde_json::json!({ "current_state": "finished" }));
    }
}
