//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use perfect_tictactoe::{Mark, MarkAssignment};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file read when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Environment variable overriding `leaderboard_path`.
pub const LEADERBOARD_ENV: &str = "TICTACTOE_LEADERBOARD";

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSON file holding the leaderboard.
    #[serde(default = "default_leaderboard_path")]
    leaderboard_path: PathBuf,

    /// Entries kept when the leaderboard is saved and shown.
    #[serde(default = "default_max_leaderboard_entries")]
    max_leaderboard_entries: usize,

    /// Mark the human plays; the computer takes the other one.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,
}

fn default_leaderboard_path() -> PathBuf {
    PathBuf::from("leaderboard.json")
}

fn default_max_leaderboard_entries() -> usize {
    5
}

fn default_human_mark() -> Mark {
    Mark::X
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            leaderboard_path: default_leaderboard_path(),
            max_leaderboard_entries: default_max_leaderboard_entries(),
            human_mark: default_human_mark(),
        }
    }
}

impl AppConfig {
    /// Resolves the configuration for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise. The
    /// [`LEADERBOARD_ENV`] variable is applied last.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };

        let override_path = std::env::var_os(LEADERBOARD_ENV).map(PathBuf::from);
        Ok(config.with_leaderboard_override(override_path))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            leaderboard = %config.leaderboard_path.display(),
            human_mark = %config.human_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.max_leaderboard_entries == 0 {
            return Err(ConfigError::new(
                "max_leaderboard_entries must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Replaces the leaderboard path when `path` is set.
    pub fn with_leaderboard_override(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            debug!(path = %path.display(), "Leaderboard path overridden");
            self.leaderboard_path = path;
        }
        self
    }

    /// Mark binding derived from `human_mark`.
    pub fn marks(&self) -> MarkAssignment {
        MarkAssignment::new(self.human_mark)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.leaderboard_path(), Path::new("leaderboard.json"));
        assert_eq!(*config.max_leaderboard_entries(), 5);
        assert_eq!(config.marks().human(), Mark::X);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = AppConfig::from_toml_str("human_mark = \"O\"\n").unwrap();
        assert_eq!(config.marks().computer(), Mark::X);
        assert_eq!(*config.max_leaderboard_entries(), 5);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(AppConfig::from_toml_str("human_mark = \"Z\"").is_err());
        assert!(AppConfig::from_toml_str("max_leaderboard_entries = 0").is_err());
        assert!(AppConfig::from_toml_str("max_leaderboard_entries = \"five\"").is_err());
    }

    #[test]
    fn test_override_replaces_path() {
        let config = AppConfig::default()
            .with_leaderboard_override(Some(PathBuf::from("/tmp/scores.json")));
        assert_eq!(config.leaderboard_path(), Path::new("/tmp/scores.json"));

        let unchanged = AppConfig::default().with_leaderboard_override(None);
        assert_eq!(unchanged, AppConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = AppConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }
}
