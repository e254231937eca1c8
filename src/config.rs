//! Configuration System
//!
//! Layered configuration for the factprune CLI: built-in defaults, the global
//! config file, workspace config files and `FACTPRUNE__*` environment
//! variables, in increasing order of precedence.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

mod facade;
mod merge_policy;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactPruneConfig {
    /// How cleaned facts are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Directory mode settings
    #[serde(default)]
    pub batch: BatchConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON (default: true)
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Settings for cleaning a directory of fact dumps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// File extension of fact dumps, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Follow symbolic links while walking (default: false)
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_extension() -> String {
    "json".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            follow_symlinks: false,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Batch(String),
    Logging(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Batch(msg) => write!(f, "Batch: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl FactPruneConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let ext = &self.batch.extension;
        if ext.is_empty() {
            errors.push(ValidationError::Batch("extension cannot be empty".to_string()));
        } else if ext.starts_with('.') || ext.contains('/') {
            errors.push(ValidationError::Batch(format!(
                "extension '{}' must be a bare name like 'json'",
                ext
            )));
        }

        if let Err(e) = crate::logging::validate(&self.logging) {
            errors.push(ValidationError::Logging(e.to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
