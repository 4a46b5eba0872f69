//! Domain-level errors.
//!
//! These errors represent business rule violations and port failures.
//! They are independent of infrastructure concerns (HTTP, storage engines).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
///
/// Validation variants are listed in the order the user constructor
/// checks them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("email cannot be empty")]
    EmailRequired,

    #[error("incorrect email format")]
    InvalidEmailFormat,

    #[error("username cannot be empty")]
    UsernameRequired,

    #[error("password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("user must be at least 13 years old")]
    MinimumAgeViolation,

    /// The password hashing port failed
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// The repository adapter failed (storage unavailable, poisoned state, ...)
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    /// Create a hashing error
    pub fn hashing(msg: impl Into<String>) -> Self {
        DomainError::Hashing(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        DomainError::Storage(msg.into())
    }

    /// True for rule violations caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        match self {
            DomainError::EmailRequired
            | DomainError::InvalidEmailFormat
            | DomainError::UsernameRequired
            | DomainError::PasswordTooShort
            | DomainError::MinimumAgeViolation => true,
            DomainError::Hashing(_) | DomainError::Storage(_) => false,
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
