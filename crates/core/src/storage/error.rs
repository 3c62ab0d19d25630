use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// A lookup that matches no row is not an error: repositories report it as
/// `Ok(None)` (or a zero row count for deletes).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Invalid field: {0}")]
    InvalidField(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
