//! # Load Errors
//!
//! Failures while fetching user records from the upstream API.

use thiserror::Error;

/// Result type alias for record loading
pub type Result<T> = std::result::Result<T, LoadError>;

/// Failures surfaced by dashboard commands
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Bookmark storage error: {0}")]
    Bookmark(#[from] hr_bookmarks::BookmarkError),

    #[error("Report error: {0}")]
    Report(#[from] hr_query::QueryError),
}

/// Record loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    #[error("User not found: {0}")]
    NotFound(u32),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl LoadError {
    /// Whether retrying the same request may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status(code) => *code >= 500,
            Self::NotFound(_) | Self::Decode(_) => false,
        }
    }

    /// Message suitable for showing to an end user
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(id) => format!("Employee {id} was not found."),
            _ if self.is_retryable() => {
                "Failed to load employees. Please try again later.".to_string()
            }
            _ => "Failed to load employees.".to_string(),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(LoadError::Status(503).is_retryable());
        assert!(!LoadError::Status(400).is_retryable());
        assert!(!LoadError::NotFound(4).is_retryable());
        assert!(!LoadError::Decode("eof".into()).is_retryable());
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(LoadError::NotFound(7).user_message(), "Employee 7 was not found.");
        assert!(LoadError::Status(502).user_message().contains("try again"));
    }
}
