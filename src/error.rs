use thiserror::Error;

use crate::validation::ValidationError;

/// Unified error type for bump-tag operations
#[derive(Error, Debug)]
pub enum BumpTagError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bump-tag
pub type Result<T> = std::result::Result<T, BumpTagError>;

impl BumpTagError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpTagError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        BumpTagError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        BumpTagError::Remote(msg.into())
    }
}

impl From<reqwest::Error> for BumpTagError {
    fn from(err: reqwest::Error) -> Self {
        BumpTagError::Remote(err.to_string())
    }
}
