//! User repository port.

use async_trait::async_trait;
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::error::DomainResult;
use crate::user::User;

/// Persistence capability for users, keyed by id with a secondary
/// lookup by email.
///
/// Lookups return `Ok(None)` when nothing matches; `Err` is reserved for
/// adapter failures (`DomainError::Storage`).
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or replace the user stored under `user.id()`
    async fn save(&self, user: User) -> DomainResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Number of stored users
    async fn count(&self) -> DomainResult<usize>;
}
