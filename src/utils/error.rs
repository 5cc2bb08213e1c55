use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

use crate::repository::StorageError;
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {message}")]
    ValidationError {
        message: String,
        details: Option<Value>,
    },

    #[error("Event ID {0} already exists")]
    DuplicateKey(i64),

    #[error("Event {0} not found")]
    NotFound(i64),

    #[error("Database error")]
    DatabaseError(#[from] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Option<Value>) -> Self {
        AppError::ValidationError {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            AppError::DuplicateKey(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError { .. } => "VALIDATION_ERROR",
            AppError::DuplicateKey(_) => "DUPLICATE_KEY",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::ValidationError { message, .. } => {
                warn!(message = %message, "Rejected request body");
            }
            AppError::DuplicateKey(id) => warn!(event_id = *id, "Event ID already exists"),
            AppError::NotFound(id) => warn!(event_id = *id, "Event not found"),
            AppError::DatabaseError(e) => error!(error = ?e, "Database error"),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::DuplicateKey(id) => AppError::DuplicateKey(id),
            StorageError::NotFound(id) => AppError::NotFound(id),
            StorageError::Database(e) => AppError::DatabaseError(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        let (public_message, details) = match self {
            AppError::ValidationError { message, details } => (message, details),
            AppError::DuplicateKey(_) => ("Event ID already exists".to_string(), None),
            AppError::NotFound(_) => ("Event not found".to_string(), None),
            AppError::DatabaseError(_) => ("A database error occurred".to_string(), None),
        };

        error_response(code, public_message, details, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_map_to_http_statuses() {
        let duplicate = AppError::from(StorageError::DuplicateKey(1));
        assert_eq!(duplicate.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(duplicate.code(), "DUPLICATE_KEY");

        let missing = AppError::from(StorageError::NotFound(1));
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let db = AppError::from(StorageError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(db.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(db.code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = AppError::validation("title must not be empty", None);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
