//! Error types for porter.

use std::io;
use thiserror::Error;

/// Result type alias for porter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in porter operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem or subprocess I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
