//! User service configuration.

use common::PasswordHashConfig;

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Argon2 cost parameters
    pub password_hash: PasswordHashConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            password_hash: PasswordHashConfig::from_env(),
        }
    }
}
