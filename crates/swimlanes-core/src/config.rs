//! Configuration loaded from `swimlanes.toml`.
//!
//! Values missing from the file fall back to defaults. `TRACKER_TOKEN` and
//! `TRACKER_URL` take precedence over the file.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;
use swimlanes_tracker::DEFAULT_BASE_URL;

use crate::error::{SwimError, SwimResult};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "swimlanes.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SwimlanesConfig {
    /// Tracker token used when a request carries none.
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default = "default_tracker_url")]
    pub tracker_url: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Display metadata keyed by user identifier.
    #[serde(default)]
    pub users: BTreeMap<String, UserProfile>,
}

/// Per-user display metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub nickname: Option<String>,
    /// Avatar image URL; Gravatar is used when absent.
    #[serde(default)]
    pub avatar: Option<String>,
}

fn default_tracker_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4567
}

impl Default for SwimlanesConfig {
    fn default() -> Self {
        Self {
            token: None,
            tracker_url: default_tracker_url(),
            host: default_host(),
            port: default_port(),
            users: BTreeMap::new(),
        }
    }
}

impl SwimlanesConfig {
    /// Load from `path`, or defaults when the file does not exist, then apply
    /// environment overrides.
    pub fn load(path: &Path) -> SwimResult<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml_str(&contents)?
        } else {
            Self::default()
        };

        config.apply_overrides(
            std::env::var("TRACKER_TOKEN").ok(),
            std::env::var("TRACKER_URL").ok(),
        );
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the dashboard cannot run with.
    pub fn validate(&self) -> SwimResult<()> {
        let scheme_ok = ["http://", "https://"]
            .iter()
            .any(|scheme| self.tracker_url.starts_with(scheme));
        if !scheme_ok {
            return Err(SwimError::Config(format!(
                "tracker_url must be an http(s) URL, got '{}'",
                self.tracker_url
            )));
        }
        if let Some((key, _)) = self.users.iter().find(|(_, u)| u.email.trim().is_empty()) {
            return Err(SwimError::Config(format!("user '{}' has an empty email", key)));
        }
        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> SwimResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Replace token and tracker URL with non-empty overrides.
    pub fn apply_overrides(&mut self, token: Option<String>, tracker_url: Option<String>) {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.token = Some(token);
        }
        if let Some(url) = tracker_url.filter(|u| !u.is_empty()) {
            self.tracker_url = url;
        }
    }

    pub fn user(&self, key: &str) -> Option<&UserProfile> {
        self.users.get(key)
    }

    /// Email-keyed view of the user table for the swimlane grouper.
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig::from_users(self.users.values().cloned())
    }
}

/// Nickname and avatar lookups by member email.
///
/// Emails are compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct DisplayConfig {
    by_email: HashMap<String, UserProfile>,
}

impl DisplayConfig {
    pub fn from_users(users: impl IntoIterator<Item = UserProfile>) -> Self {
        let by_email = users
            .into_iter()
            .map(|u| (normalize_email(&u.email), u))
            .collect();
        Self { by_email }
    }

    pub fn nickname(&self, email: &str) -> Option<&str> {
        self.by_email
            .get(&normalize_email(email))
            .and_then(|u| u.nickname.as_deref())
    }

    pub fn avatar(&self, email: &str) -> Option<&str> {
        self.by_email
            .get(&normalize_email(email))
            .and_then(|u| u.avatar.as_deref())
    }
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let config = SwimlanesConfig::default();
        assert_eq!(config.tracker_url, DEFAULT_BASE_URL);
        assert_eq!(config.port, 4567);
        assert!(config.token.is_none());
        assert!(config.users.is_empty());
    }

    #[test]
    fn deserialize_partial_toml() {
        let config = SwimlanesConfig::from_toml_str(
            r#"
            token = "abc"

            [users.ada]
            email = "Ada@Example.com"
            nickname = "Countess"
            "#,
        )
        .unwrap();
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.host, "127.0.0.1");
        let ada = config.user("ada").unwrap();
        assert_eq!(ada.nickname.as_deref(), Some("Countess"));
        assert_eq!(ada.avatar, None);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(SwimlanesConfig::from_toml_str("port = \"eighty\"").is_err());
    }

    #[test]
    fn load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SwimlanesConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.port, 4567);
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "port = 8080\nhost = \"0.0.0.0\"").unwrap();

        let config = SwimlanesConfig::load(&path).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn load_rejects_unusable_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        std::fs::write(&path, "tracker_url = \"ftp://tracker.local\"\n").unwrap();
        let err = SwimlanesConfig::load(&path).unwrap_err();
        assert!(matches!(err, SwimError::Config(_)));

        std::fs::write(&path, "[users.ghost]\nemail = \" \"\n").unwrap();
        let err = SwimlanesConfig::load(&path).unwrap_err();
        assert!(matches!(err, SwimError::Config(ref msg) if msg.contains("ghost")));
    }

    #[test]
    fn overrides_ignore_empty_values() {
        let mut config = SwimlanesConfig::default();
        config.apply_overrides(Some(String::new()), Some("http://localhost:9000".into()));
        assert!(config.token.is_none());
        assert_eq!(config.tracker_url, "http://localhost:9000");

        config.apply_overrides(Some("tok".into()), None);
        assert_eq!(config.token.as_deref(), Some("tok"));
    }

    #[test]
    fn display_lookup_is_case_insensitive() {
        let display = DisplayConfig::from_users([UserProfile {
            email: "Ada@Example.com".into(),
            nickname: Some("Countess".into()),
            avatar: Some("https://img.example.com/ada.png".into()),
        }]);
        assert_eq!(display.nickname(" ada@example.com"), Some("Countess"));
        assert_eq!(
            display.avatar("ADA@EXAMPLE.COM"),
            Some("https://img.example.com/ada.png")
        );
        assert_eq!(display.nickname("bob@example.com"), None);
    }
}
