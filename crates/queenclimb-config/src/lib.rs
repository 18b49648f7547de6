//! Configuration system for QueenClimb.
//!
//! Load search configuration from TOML or YAML files to control seeding,
//! the run step limit and the starting board without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use queenclimb_config::SearchConfig;
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     random_seed = 42
//!     step_limit = 500
//!     initial_rows = [0, 0, 0, 0, 0, 0]
//!
//!     [logging]
//!     level = "debug"
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(42));
//! assert_eq!(config.step_limit, Some(500));
//! assert_eq!(config.logging.level, "debug");
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use queenclimb_config::SearchConfig;
//!
//! let config = SearchConfig::load("queenclimb.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "queenclimb.toml";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main search configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Random seed for reproducible runs. `None` draws from OS entropy.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Maximum steps per run-to-completion call. `None` is unbounded.
    #[serde(default)]
    pub step_limit: Option<u64>,

    /// Fixed starting board, one row per column.
    #[serde(default)]
    pub initial_rows: Option<Vec<usize>>,

    /// Console logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, YAML for `.yaml`/`.yml`, TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, doesn't parse, or holds
    /// invalid values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        if is_yaml {
            Self::from_yaml_file(path)
        } else {
            Self::from_toml_file(path)
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Checks values that parse but cannot drive a search.
    ///
    /// Board-size checks on `initial_rows` happen when the board is built,
    /// since the size is a compile-time constant of the search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "step_limit must be at least 1".to_string(),
            ));
        }
        if matches!(&self.initial_rows, Some(rows) if rows.is_empty()) {
            return Err(ConfigError::Invalid(
                "initial_rows must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the run step limit.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Sets a fixed starting board.
    pub fn with_initial_rows(mut self, rows: Vec<usize>) -> Self {
        self.initial_rows = Some(rows);
        self
    }

    /// Sets the default log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}

/// Console logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset.
    pub level: String,

    /// Whether to print the startup banner.
    pub banner: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            banner: true,
        }
    }
}

#[cfg(test)]
mod tests;
