//! Error types for the mcc-f1 library.

use thiserror::Error;

/// Result type for mcc-f1 operations.
pub type Result<T> = std::result::Result<T, MccF1Error>;

/// Error types that can occur while building or reducing an MCC-F1 curve.
#[derive(Error, Debug)]
pub enum MccF1Error {
    /// Labels/scores or curve sequences that cannot be evaluated.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration values outside their valid range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Input that leaves no subrange to average over.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Error during JSON parsing or serialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error during I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A required DataFrame column is absent.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// DataFrame content that cannot be converted.
    #[error("Invalid DataFrame: {0}")]
    InvalidDataFrame(String),

    /// Error raised by Polars.
    #[error("Polars error: {0}")]
    PolarsError(#[from] polars::prelude::PolarsError),
}
