//! Bookmark store error types

use thiserror::Error;

/// Bookmark store errors
#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

impl From<serde_json::Error> for BookmarkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BookmarkError>;
