use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use todolist_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::models::ErrorResponse;

/// Handler error, rendered as `{"message", "status"}`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client input could not be used.
    #[error("{0}")]
    BadRequest(&'static str),
    /// No record matches the request.
    #[error("{0}")]
    NotFound(&'static str),
    /// The store failed; the message is passed through.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Repository(e) => StatusCode::from_u16(repository_error_to_status_code(e))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Request failed");
        } else {
            tracing::warn!(status = %status, message = %message, "API error");
        }

        (status, Json(ErrorResponse::new(status, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_keep_fixed_messages() {
        let error = AppError::BadRequest("Invalid input");

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Invalid input");
    }

    #[test]
    fn test_store_failures_are_500_with_store_message() {
        let error = AppError::from(RepositoryError::QueryFailed("deadlock".to_string()));

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Query failed: deadlock");
    }

    #[test]
    fn test_not_found_is_404() {
        assert_eq!(
            AppError::NotFound("Not Found").status_code(),
            StatusCode::NOT_FOUND
        );
    }
}
