//! Core error types.

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
///
/// Classification itself never fails; these cover the ambient plumbing
/// around it.
#[derive(Debug, Error)]
pub enum CoreError {
    /// IO error (e.g., reading a config file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
