//! Service-wide construction defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

use crate::{ErrorOption, StructuredError, with_code, with_queue};

/// Configuration error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use errplus_core::ConfigError;
    ///
    /// let err = ConfigError::new("Missing required field");
    /// assert!(err.message.contains("Missing required"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Options applied to every error a service builds through [`ErrorDefaults::error`].
///
/// Loaded from the `[defaults]` table of a TOML file:
///
/// ```toml
/// [defaults]
/// code = 500
/// requeue = true
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_new::new,
)]
#[setters(prefix = "with_")]
pub struct ErrorDefaults {
    /// Status code, zero leaves it unset
    #[serde(default)]
    #[new(default)]
    code: i64,
    /// Requeue hint
    #[serde(default)]
    #[new(default)]
    requeue: bool,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    defaults: ErrorDefaults,
}

impl ErrorDefaults {
    /// Load defaults from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or the TOML is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse defaults from TOML text.
    ///
    /// # Errors
    ///
    /// Returns error if the TOML is invalid or a value has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(
            code = file.defaults.code,
            requeue = file.defaults.requeue,
            "Loaded error defaults"
        );
        Ok(file.defaults)
    }

    /// The options these defaults imply, omitting zero values.
    pub fn options(&self) -> Vec<ErrorOption> {
        let mut options = Vec::new();
        if self.code != 0 {
            options.push(with_code(self.code));
        }
        if self.requeue {
            options.push(with_queue(true));
        }
        options
    }

    /// Build an error with these defaults applied before `options`.
    ///
    /// Explicit options override the defaults.
    ///
    /// ```
    /// use errplus_core::{ErrorDefaults, with_code};
    ///
    /// let defaults = ErrorDefaults::new().with_code(500).with_requeue(true);
    /// let err = defaults.error("broker unreachable", [with_code(503)]);
    /// assert_eq!(*err.code(), 503);
    /// assert!(err.should_requeue());
    /// ```
    pub fn error<I>(&self, input: impl std::fmt::Display, options: I) -> StructuredError
    where
        I: IntoIterator<Item = ErrorOption>,
    {
        StructuredError::with_options(input, self.options().into_iter().chain(options))
    }
}
