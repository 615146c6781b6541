//! Error types for flock loading and validation

use thiserror::Error;

/// Result type for parrot operations
pub type Result<T> = std::result::Result<T, ParrotError>;

/// Errors that can occur while validating or (de)serializing parrots
#[derive(Debug, Error)]
pub enum ParrotError {
    /// A parrot carries values outside its physical range
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed flock JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed flock CBOR
    #[error("CBOR error: {0}")]
    Cbor(#[from] serde_cbor::Error),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
