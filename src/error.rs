//! Error types for modelscout

use thiserror::Error;

/// Result type alias for modelscout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Main error type for modelscout
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Data error: {0}")]
    DataError(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Invalid algorithm descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Algorithm not found: {0}")]
    AlgorithmNotFound(String),

    #[error("No candidates: {0}")]
    NoCandidates(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid parameter: {name} = {value}, {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<polars::error::PolarsError> for ScoutError {
    fn from(err: polars::error::PolarsError) -> Self {
        ScoutError::DataError(err.to_string())
    }
}

impl From<serde_json::Error> for ScoutError {
    fn from(err: serde_json::Error) -> Self {
        ScoutError::SerializationError(err.to_string())
    }
}
