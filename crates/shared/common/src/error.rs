//! Unified error handling for the HTTP boundary.
//!
//! `AppError` is a closed enumeration: the gateway matches on it
//! exhaustively to pick a status code, never on message text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Another user already registered this email
    #[error("email already exists")]
    EmailAlreadyExists,

    #[error("user not found")]
    NotFound,

    /// The request body (or path) could not be decoded
    #[error("Invalid request body")]
    InvalidRequestBody,

    /// Rule violation or port failure, kept exactly as the domain raised it
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Server-side failure; the message is safe to show to clients
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmailAlreadyExists => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidRequestBody => StatusCode::BAD_REQUEST,
            AppError::Domain(err) if err.is_validation() => StatusCode::BAD_REQUEST,
            AppError::Domain(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True when the failure is on our side rather than the caller's.
    pub fn is_server_error(&self) -> bool {
        self.status().is_server_error()
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Domain(err) if !err.is_validation() => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }

    /// Replace a server-side error with a client-safe message, logging the
    /// original. Client errors pass through untouched.
    pub fn or_internal(self, message: &str) -> Self {
        if self.is_server_error() {
            tracing::error!(error = %self, "{}", message);
            AppError::Internal(message.to_string())
        } else {
            self
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Domain(err) = &self {
            if !err.is_validation() {
                tracing::error!("Domain error: {}", err);
            }
        }

        (self.status(), self.user_message()).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
