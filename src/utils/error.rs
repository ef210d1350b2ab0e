//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Note that the engine itself (normalizer, builder, aggregator) never
//! fails on data quality: malformed events are rejected and surfaced as
//! data, not as errors. These types cover the file/serialization boundary.

use thiserror::Error;

/// Errors that can occur while reading input collections
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur during chart data generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to serialize entity for field lookup: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Field name cannot be empty")]
    EmptyField,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
