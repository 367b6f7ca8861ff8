//! Query error types.

use thiserror::Error;

/// Query and report errors.
///
/// Filtering and aggregation never fail; only report serialization can.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Report serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
