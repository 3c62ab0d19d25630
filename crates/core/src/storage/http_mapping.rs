//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `ConnectionFailed` -> 500 (Internal Server Error)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 400 (Bad Request)
/// - `InvalidField` -> 400 (Bad Request)
///
/// # Examples
///
/// ```
/// use todolist_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::InvalidField("priority".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 400);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::ConnectionFailed(_) => 500,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::InvalidField(_) => 400,
    }
}
