//! Error types for gauge primitives.

use thiserror::Error;

/// Result type alias for gauge operations.
pub type GaugeResult<T> = Result<T, GaugeError>;

/// Errors that can occur while building gauges or parsing lengths.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaugeError {
    #[error("Invalid gauge: {}", .0.join("; "))]
    InvalidGauge(Vec<String>),

    #[error("Invalid length '{input}': {message}")]
    InvalidLength { input: String, message: String },

    #[error("Unknown unit: {0} (expected 'cm' or 'inch')")]
    UnknownUnit(String),
}
