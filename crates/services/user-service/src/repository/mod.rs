//! Repository layer for data access.

mod user_repository;

pub use user_repository::InMemoryUserStore;
