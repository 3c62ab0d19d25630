//! MySQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `todolist_core::storage`.

use todolist_core::storage::RepositoryError;

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - I/O, TLS, pool timeout/closed, worker crash → `RepositoryError::ConnectionFailed`
/// - All other errors, row decode failures included → `RepositoryError::QueryFailed`
///
/// `InvalidData` is reserved for rejected client input, so nothing the
/// database returns is ever reported as one.
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => RepositoryError::ConnectionFailed(err.to_string()),

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
