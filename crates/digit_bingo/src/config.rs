//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use digit_bingo_core::FeedbackStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite database holding records and settings.
    #[serde(default = "default_db_path")]
    db_path: String,

    /// How duel guesses are scored.
    #[serde(default)]
    duel_feedback: FeedbackStrategy,

    /// Milliseconds between clock ticks.
    #[serde(default = "default_tick_millis")]
    tick_millis: u64,
}

#[instrument]
fn default_db_path() -> String {
    "digit_bingo.db".to_string()
}

#[instrument]
fn default_tick_millis() -> u64 {
    1000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            duel_feedback: FeedbackStrategy::default(),
            tick_millis: default_tick_millis(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or
    /// sets a zero tick interval.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid configuration.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.tick_millis == 0 {
            return Err(ConfigError::new("tick_millis must be positive".to_string()));
        }
        info!(db_path = %config.db_path, duel_feedback = %config.duel_feedback, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise uses defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the database path.
    #[instrument(skip(self))]
    pub fn with_db_path(mut self, db_path: String) -> Self {
        self.db_path = db_path;
        self
    }

    /// Replaces the duel feedback strategy.
    #[instrument(skip(self))]
    pub fn with_duel_feedback(mut self, strategy: FeedbackStrategy) -> Self {
        self.duel_feedback = strategy;
        self
    }

    /// Interval between clock ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
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
