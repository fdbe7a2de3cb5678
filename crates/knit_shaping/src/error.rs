//! Error types for shaping calculations.

use thiserror::Error;

/// Result type alias for shaping operations.
pub type ShapingResult<T> = Result<T, ShapingError>;

/// Errors that stop a shaping schedule from being produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapingError {
    #[error("Shaping validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Not enough rows: {events} shaping rows are needed but only {rows} rows are available")]
    NotEnoughRows { events: u32, rows: u32 },
}
