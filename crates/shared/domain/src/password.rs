//! Password hashing port.

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::error::DomainResult;

/// One-way password hashing capability.
///
/// `hash` must never return the plaintext and may salt, so repeated calls
/// with the same input can differ. `compare` must accept every hash `hash`
/// produced for the same plaintext.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password.
    fn hash(&self, plaintext: &str) -> DomainResult<String>;

    /// Check a plaintext password against a stored hash.
    ///
    /// A mismatch is `Ok(false)`; an unreadable hash is an error.
    fn compare(&self, hashed: &str, plaintext: &str) -> DomainResult<bool>;
}
