//! Error types for fact pruning and the surfaces around it.

use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while pruning or cleaning a fact tree.
///
/// None of these are recovered internally. A fact tree that triggers one did
/// not have the shape the cleanup rules expect.
#[derive(Debug, Error)]
pub enum PruneError {
    #[error("Incompatible structure in {path}: {subject} vs. {spec}")]
    StructuralMismatch {
        path: String,
        subject: Value,
        spec: Value,
    },

    #[error("List key not found: {list_key}")]
    MissingListKey { list_key: String },

    #[error("Field {field:?} missing from {list_key}[{index}]")]
    MissingField {
        list_key: String,
        index: usize,
        field: String,
    },

    #[error("Expected a list at {list_key}")]
    NotAList { list_key: String },

    #[error("Expected a mapping at {path}")]
    NotAMapping { path: String },

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
}

/// API-level errors for the CLI, config and snapshot layers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Prune failed: {0}")]
    Prune(#[from] PruneError),

    #[error("Input not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Invalid JSON in {source_name}: {error}")]
    InvalidJson {
        source_name: String,
        error: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
