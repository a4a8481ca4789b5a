//! Error types for cr-threads

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cr-threads
#[derive(Debug, Error)]
pub enum ThreadsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Comment record is missing data needed to place it
    #[error("Invalid comment: {0}")]
    InvalidComment(String),

    /// Invalid diff hunk header
    #[error("Invalid diff hunk: {0}")]
    InvalidHunk(String),

    /// Computed anchor line is negative
    #[error("Invalid anchor: position {position} with hunk start {start} yields a negative line")]
    InvalidAnchor { position: i64, start: i64 },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host cancelled the request before all sources settled
    #[error("Comment request was cancelled")]
    Cancelled,

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ThreadsError>,
    },
}

impl ThreadsError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ThreadsError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for cr-threads
pub type Result<T> = std::result::Result<T, ThreadsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ThreadsError::InvalidAnchor { position: 0, start: 1 };
        assert_eq!(
            err.to_string(),
            "Invalid anchor: position 0 with hunk start 1 yields a negative line"
        );
    }

    #[test]
    fn test_cancelled_display() {
        assert_eq!(ThreadsError::Cancelled.to_string(), "Comment request was cancelled");
    }

    #[test]
    fn test_error_with_context() {
        let err = ThreadsError::Validation("unknown format".to_string());
        let err = err.with_context("Failed to export threads");
        assert!(err.to_string().contains("Failed to export threads"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ThreadsError = io_err.into();
        assert!(matches!(err, ThreadsError::Io(_)));
    }
}
