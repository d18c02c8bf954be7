//! Error types for dataset and configuration handling.

/// Result type for dataset and configuration operations
pub type DataResult<T> = Result<T, DataError>;

/// Error type for dataset and configuration operations
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Unknown activity label: {0}")]
    UnknownActivity(String),

    #[error("Unknown measure label: {0}")]
    UnknownMeasure(String),

    #[error("Non-finite value in field '{0}'")]
    NonFiniteValue(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<String> for DataError {
    fn from(s: String) -> Self {
        DataError::InternalError(s)
    }
}

impl From<&str> for DataError {
    fn from(s: &str) -> Self {
        DataError::InternalError(s.to_string())
    }
}
