//! User Service Library
//!
//! Application layer of the registration backend: the user creation
//! workflow plus the adapters (in-memory storage, Argon2 hashing) that plug
//! into the domain ports.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use domain::DomainResult;

use crate::config::UserServiceConfig;
use crate::infra::Argon2Hasher;
use crate::repository::InMemoryUserStore;
use crate::service::{UserManager, UserService};

/// Wire the service with its default adapters.
///
/// The returned service owns a fresh, empty in-memory store; call this once
/// at startup and share the handle.
pub fn build_user_service(config: &UserServiceConfig) -> DomainResult<Arc<dyn UserService>> {
    let hasher = Arc::new(Argon2Hasher::new(&config.password_hash)?);
    let user_repo = Arc::new(InMemoryUserStore::new());

    info!(
        memory_kib = config.password_hash.memory_kib,
        iterations = config.password_hash.iterations,
        "User service initialized with in-memory storage"
    );

    Ok(Arc::new(UserManager::new(user_repo, hasher)))
}
