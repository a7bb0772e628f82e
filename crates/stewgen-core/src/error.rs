//! Centralized error types for the generator.

use thiserror::Error;

/// Main error type for generator operations.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Unknown pool: {0}")]
    UnknownPool(String),

    #[error("No chain id mapping for chain '{0}'")]
    UnmappedChain(String),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Feature '{0}' is not registered")]
    UnknownFeature(String),

    #[error("Records for '{found}' cannot be built as '{expected}'")]
    MismatchedRecords { expected: String, found: String },

    #[error("Invalid config file: {0}")]
    InvalidConfig(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for generator operations.
pub type GenResult<T> = Result<T, GenError>;

impl GenError {
    /// Create an invalid config error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a prompt error.
    pub fn prompt(msg: impl Into<String>) -> Self {
        Self::Prompt(msg.into())
    }
}
