//! User settings loaded from `<config_dir>/taskdeck/config.toml`
//!
//! Missing file or missing keys fall back to defaults; a malformed file is
//! logged and ignored rather than aborting startup. Resolution order for the
//! server URL: CLI flag, then `TASKDECK_SERVER`, then the config file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Base URL of the task tracker
    pub url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
        }
    }
}

impl Settings {
    /// Path of the settings file, if a config dir exists on this platform
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("taskdeck").join("config.toml"))
    }

    /// Load settings from the default location
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from a specific file, tolerating absence and parse
    /// failures
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Resolve the effective server URL: CLI flag > `TASKDECK_SERVER` env >
    /// config file value.
    pub fn resolve_server_url(&self, cli_override: Option<&str>) -> String {
        if let Some(url) = cli_override {
            return url.to_string();
        }
        if let Ok(url) = std::env::var("TASKDECK_SERVER") {
            if !url.is_empty() {
                return url;
            }
        }
        self.server.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = Settings::load_from(Path::new("/nonexistent/config.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.server.url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nurl = \"http://tracker:8080\"\n").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.server.url, "http://tracker:8080");
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not toml = = =").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\n").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.server.url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_cli_override_wins() {
        let settings = Settings::default();
        assert_eq!(
            settings.resolve_server_url(Some("http://cli:1234")),
            "http://cli:1234"
        );
    }
}
