//! Error types for pattern resizing.

use thiserror::Error;

/// Result type alias for resize operations.
pub type ResizerResult<T> = Result<T, ResizeError>;

/// Errors that stop a resize from producing a result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResizeError {
    #[error("Template not found: {0}")]
    UnknownTemplate(String),

    #[error("Resize validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Shaping error: {0}")]
    Shaping(#[from] knit_shaping::ShapingError),
}

impl ResizeError {
    /// Field-level messages, if this is a validation failure.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ResizeError::Validation(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}
