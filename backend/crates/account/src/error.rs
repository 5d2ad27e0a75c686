//! Account Error Types
//!
//! Account-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! User-visible messages never include internal identifiers, hash values,
//! or storage error detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Email already has an account
    #[error("This email address is already registered")]
    DuplicateEmail,

    /// Wrong password or unknown email, deliberately undifferentiated
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Session token missing, forged, or unresolvable
    #[error("Session is not valid")]
    SessionInvalid,

    /// Role outside the allowed value set
    #[error("Unknown account role")]
    InvalidRole,

    /// A required field is missing or malformed
    #[error("Invalid field: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::DuplicateEmail => StatusCode::CONFLICT,
            AccountError::InvalidCredentials | AccountError::SessionInvalid => {
                StatusCode::UNAUTHORIZED
            }
            AccountError::InvalidRole | AccountError::Validation(_) => StatusCode::BAD_REQUEST,
            AccountError::Database(_) | AccountError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::DuplicateEmail => ErrorKind::Conflict,
            AccountError::InvalidCredentials | AccountError::SessionInvalid => {
                ErrorKind::Unauthorized
            }
            AccountError::InvalidRole | AccountError::Validation(_) => ErrorKind::BadRequest,
            AccountError::Database(_) | AccountError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            // Keep internal detail out of the user-visible message
            AccountError::Database(_) => AppError::new(self.kind(), "Storage unavailable"),
            AccountError::Internal(_) => AppError::new(self.kind(), "Internal error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        AccountError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AccountError::DuplicateEmail.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AccountError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AccountError::SessionInvalid.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AccountError::InvalidRole.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_detail_not_exposed() {
        let err = AccountError::Database(sqlx::Error::PoolClosed);
        let app_err = err.to_app_error();
        assert_eq!(app_err.message(), "Storage unavailable");
    }

    #[test]
    fn test_credential_failure_is_undifferentiated() {
        // Unknown email and wrong password must surface identically
        let msg = AccountError::InvalidCredentials.to_string();
        assert!(!msg.to_lowercase().contains("email not found"));
        assert!(!msg.to_lowercase().contains("wrong password"));
    }
}
