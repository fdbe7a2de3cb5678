//! Error types for hammer-sleeve calculations.

use thiserror::Error;

/// Result type alias for hammer-sleeve operations.
pub type SleeveResult<T> = Result<T, SleeveError>;

/// Errors that stop a hammer-sleeve layout from being produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SleeveError {
    #[error("Hammer sleeve validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Unknown garment component: {0} (expected front, back or sleeve)")]
    UnknownComponent(String),
}
