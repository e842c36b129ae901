// src/error.rs
// Standardized error types for pricel

use thiserror::Error;

/// Main error type for the pricel library
///
/// Display strings double as the user-visible `detail` messages in the
/// HTTP error body, so they are written for humans.
#[derive(Error, Debug)]
pub enum PricelError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid prompt name: {0}")]
    InvalidName(String),

    /// Carries the namespace-relative path of the missing resource,
    /// e.g. `constructs/nonexistent.txt`.
    #[error("File not found: {0}")]
    PromptNotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Result using PricelError
pub type Result<T> = std::result::Result<T, PricelError>;
