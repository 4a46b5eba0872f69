//! Infrastructure layer - adapters for the domain ports.

mod password;

pub use password::Argon2Hasher;
