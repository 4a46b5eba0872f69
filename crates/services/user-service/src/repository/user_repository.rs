//! In-memory user repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain::{DomainResult, User, UserRepository};

/// `UserRepository` backed by a map guarded by a reader/writer lock.
///
/// Lives for as long as the instance does; nothing is written to disk.
/// `save` does not check email uniqueness, so two concurrent registrations
/// of the same address can both succeed.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn save(&self, user: User) -> DomainResult<()> {
        let mut users = self.users.write().await;
        tracing::debug!(user_id = %user.id(), "Storing user");
        users.insert(user.id(), user);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email() == email).cloned())
    }

    async fn count(&self) -> DomainResult<usize> {
        Ok(self.users.read().await.len())
    }
}
