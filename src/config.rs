//! Match configuration loaded from TOML.

use crate::games::tictactoe::{DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a match session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Name of the player who plays X.
    #[serde(default = "default_player1")]
    player1: String,

    /// Name of the player who plays O.
    #[serde(default = "default_player2")]
    player2: String,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player1() -> String {
    DEFAULT_FIRST_NAME.to_string()
}

fn default_player2() -> String {
    DEFAULT_SECOND_NAME.to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_match.log")
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player1: default_player1(),
            player2: default_player2(),
            log_file: default_log_file(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player1 = %config.player1, player2 = %config.player2, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of this configuration.
    ///
    /// Empty names are ignored so a file or default value survives.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player1: Option<&str>,
        player2: Option<&str>,
        log_file: Option<&Path>,
    ) -> Self {
        if let Some(name) = player1.filter(|n| !n.is_empty()) {
            self.player1 = name.to_string();
        }
        if let Some(name) = player2.filter(|n| !n.is_empty()) {
            self.player2 = name.to_string();
        }
        if let Some(path) = log_file {
            self.log_file = path.to_path_buf();
        }
        self
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
