//! Filing bug tickets from the dashboard.

use serde::Deserialize;
use swimlanes_tracker::{NewStory, Tracker};
use tracing::info;

use crate::config::{normalize_email, SwimlanesConfig};
use crate::error::{SwimError, SwimResult};
use crate::member::{self, Member};
use crate::project;
use crate::story::model::{Story, StoryType};

/// A bug submitted through the dashboard form.
#[derive(Debug, Clone, Deserialize)]
pub struct BugReport {
    /// Key into the configured user table; empty for anonymous reports.
    #[serde(default)]
    pub submitter: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Member whose email matches the configured email of `submitter`.
pub fn resolve_requester<'a>(
    config: &SwimlanesConfig,
    members: &'a [Member],
    submitter: &str,
) -> Option<&'a Member> {
    let email = normalize_email(&config.user(submitter)?.email);
    members.iter().find(|m| normalize_email(&m.email) == email)
}

fn describe(report: &BugReport, config: &SwimlanesConfig) -> String {
    let key = report.submitter.trim();
    let by = if key.is_empty() {
        "anonymous".to_string()
    } else {
        config
            .user(key)
            .and_then(|u| u.nickname.clone())
            .unwrap_or_else(|| key.to_string())
    };

    match report.description.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => format!("{}\n\nSubmitted by {}", text, by),
        _ => format!("Submitted by {}", by),
    }
}

/// Create a bug story in the project.
///
/// The requester is set when the submitter's configured email belongs to a
/// project member; otherwise the tracker attributes the story to the token
/// owner.
pub async fn file_bug(
    tracker: &dyn Tracker,
    project_id: u64,
    report: &BugReport,
    config: &SwimlanesConfig,
) -> SwimResult<Story> {
    let name = report.name.trim();
    if name.is_empty() {
        return Err(SwimError::validation("bug name must not be empty"));
    }

    project::get_project(tracker, project_id).await?;
    let members = member::list_members(tracker, project_id).await?;
    let requester = resolve_requester(config, &members, report.submitter.trim());

    let new_story = NewStory {
        name: name.to_string(),
        description: Some(describe(report, config)),
        story_type: StoryType::Bug.as_str().to_string(),
        requested_by_id: requester.map(|m| m.id),
    };

    let created = tracker.create_story(project_id, &new_story).await?;
    info!(
        project_id,
        story_id = created.id,
        submitter = %report.submitter,
        requester = ?requester.map(|m| m.name.as_str()),
        "filed bug"
    );

    Ok(Story::from_resource(created, &members))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserProfile;
    use swimlanes_tracker::memory::InMemoryTracker;
    use swimlanes_tracker::PersonResource;

    fn config() -> SwimlanesConfig {
        let mut config = SwimlanesConfig::default();
        config.users.insert(
            "ada".into(),
            UserProfile {
                email: "Ada@Example.com".into(),
                nickname: Some("Countess".into()),
                avatar: None,
            },
        );
        config.users.insert(
            "eve".into(),
            UserProfile {
                email: "eve@elsewhere.com".into(),
                nickname: None,
                avatar: None,
            },
        );
        config
    }

    fn tracker() -> InMemoryTracker {
        InMemoryTracker::new()
            .with_project(3, "Dashboard")
            .with_member(
                3,
                PersonResource {
                    id: 21,
                    name: "Ada Byron".into(),
                    initials: "AB".into(),
                    email: "ada@example.com".into(),
                    username: None,
                },
            )
    }

    fn report(submitter: &str, name: &str) -> BugReport {
        BugReport {
            submitter: submitter.into(),
            name: name.into(),
            description: Some("Steps to reproduce".into()),
        }
    }

    #[tokio::test]
    async fn bug_from_member_sets_requester() {
        let tracker = tracker();
        let story = file_bug(&tracker, 3, &report("ada", "Crash on save"), &config())
            .await
            .unwrap();

        assert_eq!(story.story_type, StoryType::Bug);
        let created = tracker.created();
        assert_eq!(created[0].requested_by_id, Some(21));
        assert_eq!(
            created[0].description.as_deref(),
            Some("Steps to reproduce\n\nSubmitted by Countess")
        );
    }

    #[tokio::test]
    async fn bug_from_non_member_leaves_requester_unset() {
        let tracker = tracker();
        file_bug(&tracker, 3, &report("eve", "Typo"), &config())
            .await
            .unwrap();
        file_bug(&tracker, 3, &report("nobody", "Other typo"), &config())
            .await
            .unwrap();

        let created = tracker.created();
        assert!(created.iter().all(|s| s.requested_by_id.is_none()));
        assert_eq!(
            created[1].description.as_deref(),
            Some("Steps to reproduce\n\nSubmitted by nobody")
        );
    }

    #[tokio::test]
    async fn anonymous_bug_is_attributed_to_token_owner() {
        let tracker = tracker();
        let anonymous = BugReport {
            submitter: String::new(),
            name: "Slow page".into(),
            description: None,
        };
        file_bug(&tracker, 3, &anonymous, &config()).await.unwrap();

        let created = tracker.created();
        assert_eq!(created[0].requested_by_id, None);
        assert_eq!(created[0].description.as_deref(), Some("Submitted by anonymous"));
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let tracker = tracker();
        let err = file_bug(&tracker, 3, &report("ada", "   "), &config())
            .await
            .unwrap_err();
        assert!(matches!(err, SwimError::ValidationError(_)));
        assert!(tracker.created().is_empty());
    }

    #[tokio::test]
    async fn unknown_project_is_not_found() {
        let tracker = tracker();
        let err = file_bug(&tracker, 99, &report("ada", "Crash"), &config())
            .await
            .unwrap_err();
        assert!(matches!(err, SwimError::ProjectNotFound(99)));
    }
}
