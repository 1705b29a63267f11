use thiserror::Error;

/// Main error type for the fuzzy sorter
///
/// Scoring and ranking are total and never fail; only configuration
/// loading and argument parsing produce errors.
#[derive(Error, Debug)]
pub enum FuzzySortError {
    /// File errors while loading configuration or candidates
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Weight name that doesn't exist on `WeightConfig`
    #[error("Unknown weight '{0}'")]
    UnknownWeight(String),

    /// Malformed user-supplied argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<String> for FuzzySortError {
    fn from(s: String) -> Self {
        FuzzySortError::InvalidArgument(s)
    }
}

impl From<&str> for FuzzySortError {
    fn from(s: &str) -> Self {
        FuzzySortError::InvalidArgument(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FuzzySortError>;
