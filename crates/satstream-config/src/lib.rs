//! Configuration system for satstream.
//!
//! Load enumeration configuration from TOML or YAML files to bound the number
//! of enumerated solutions, put a deadline on each satisfiability check, and
//! choose how an empty variable list is treated, without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use satstream_config::EnumerationConfig;
//! use std::time::Duration;
//!
//! let config = EnumerationConfig::from_toml_str(r#"
//!     solution_limit = 10
//!     check_timeout_ms = 500
//! "#).unwrap();
//!
//! assert_eq!(config.solution_limit, Some(10));
//! assert_eq!(config.check_timeout(), Some(Duration::from_millis(500)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use satstream_config::EnumerationConfig;
//!
//! let config = EnumerationConfig::load("enumeration.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

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

/// Enumeration configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EnumerationConfig {
    /// Maximum number of solutions to enumerate. `None` means unbounded.
    #[serde(default)]
    pub solution_limit: Option<usize>,

    /// Deadline for each satisfiability check, in milliseconds.
    #[serde(default)]
    pub check_timeout_ms: Option<u64>,

    /// Fail instead of warning when the variable list is empty.
    #[serde(default)]
    pub reject_empty_variables: bool,
}

impl EnumerationConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the maximum number of solutions.
    pub fn with_solution_limit(mut self, limit: usize) -> Self {
        self.solution_limit = Some(limit);
        self
    }

    /// Sets the per-check deadline in milliseconds.
    pub fn with_check_timeout_ms(mut self, millis: u64) -> Self {
        self.check_timeout_ms = Some(millis);
        self
    }

    /// Sets whether an empty variable list is an error.
    pub fn with_reject_empty_variables(mut self, reject: bool) -> Self {
        self.reject_empty_variables = reject;
        self
    }

    /// Returns the per-check deadline, if configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use satstream_config::EnumerationConfig;
    /// use std::time::Duration;
    ///
    /// let config = EnumerationConfig::new().with_check_timeout_ms(250);
    /// assert_eq!(config.check_timeout(), Some(Duration::from_millis(250)));
    /// assert_eq!(EnumerationConfig::new().check_timeout(), None);
    /// ```
    pub fn check_timeout(&self) -> Option<Duration> {
        self.check_timeout_ms.map(Duration::from_millis)
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// A zero check timeout would fail every check before it starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.check_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid(
                "check_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
