//! Domain layer - Core business entities, rules and ports.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Adapters (storage, hashing, HTTP) live in the service and gateway crates
//! and plug into the ports declared here.

pub mod constants;
pub mod error;
pub mod password;
pub mod repository;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::PasswordHasher;
pub use repository::UserRepository;
pub use user::{CreateUser, NewUser, User, UserResponse};

#[cfg(any(test, feature = "test-utils"))]
pub use password::MockPasswordHasher;
#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;
