//! Mining Error Types
//!
//! This module provides mining-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Mining-specific result type alias
pub type MiningResult<T> = Result<T, MiningError>;

/// Mining-specific error variants
#[derive(Debug, Error)]
pub enum MiningError {
    /// No plan rate for the user and the base rate setting is absent
    #[error("Earnings rate is not configured")]
    RateUnavailable,

    /// Account vanished between authentication and the balance update
    #[error("Account not found")]
    UserNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MiningError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MiningError::RateUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            MiningError::UserNotFound => StatusCode::NOT_FOUND,
            MiningError::Database(_) | MiningError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MiningError::RateUnavailable => ErrorKind::ServiceUnavailable,
            MiningError::UserNotFound => ErrorKind::NotFound,
            MiningError::Database(_) | MiningError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MiningError::Database(e) => {
                tracing::error!(error = %e, "Mining database error");
            }
            MiningError::Internal(msg) => {
                tracing::error!(message = %msg, "Mining internal error");
            }
            MiningError::RateUnavailable => {
                tracing::error!("No earnings rate available; check seeded settings");
            }
            _ => {
                tracing::debug!(error = %self, "Mining error");
            }
        }
    }
}

impl From<MiningError> for AppError {
    fn from(err: MiningError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for MiningError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
