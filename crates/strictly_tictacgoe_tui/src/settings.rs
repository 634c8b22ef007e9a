//! Game settings: defaults, TOML file, and command-line overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Grid size. Validated when the game is created.
    #[serde(default = "default_size")]
    size: i64,

    /// Where log output goes.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_size() -> i64 {
    3
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictacgoe.log")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: default_size(),
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        debug!(size = settings.size, "Settings loaded from file");
        Ok(settings)
    }

    /// Resolves settings: command-line flags beat the settings file, which
    /// beats the defaults.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(size) = cli.size {
            settings.size = size;
        }
        if let Some(log_file) = &cli.log_file {
            settings.log_file = log_file.clone();
        }

        Ok(settings)
    }
}

/// Settings error.
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
