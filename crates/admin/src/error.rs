//! Unified error handling for admin.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::AdministratorsError;

/// Application-level error type for the admin API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<AdministratorsError> for AppError {
    fn from(err: AdministratorsError) -> Self {
        match err {
            AdministratorsError::Validation(e) => Self::BadRequest(e.to_string()),
            AdministratorsError::Store(e) => Self::Database(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Database(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Admin request error"
            );
        }

        // Don't expose internal error details to clients
        match self {
            Self::Database(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ValidationError;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("Missing email".to_string());
        assert_eq!(err.to_string(), "Bad request: Missing email");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Database(RepositoryError::Conflict(
                "email already exists".to_string()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_errors_become_bad_requests() {
        let err = AppError::from(AdministratorsError::from(ValidationError::InvalidEmail));
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Invalid email address"));
    }

    #[test]
    fn test_store_errors_pass_through() {
        let err = AppError::from(AdministratorsError::from(RepositoryError::Unavailable(
            "down".to_string(),
        )));
        assert!(matches!(
            err,
            AppError::Database(RepositoryError::Unavailable(_))
        ));
    }
}
