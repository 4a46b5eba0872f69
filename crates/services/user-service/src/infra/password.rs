//! Argon2 adapter for the password hashing port.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use common::PasswordHashConfig;
use domain::{DomainError, DomainResult, PasswordHasher};

/// Argon2id password hasher producing PHC-formatted strings.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Create a hasher with the given cost parameters.
    ///
    /// # Errors
    /// Returns a hashing error if argon2 rejects the parameters.
    pub fn new(config: &PasswordHashConfig) -> DomainResult<Self> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| DomainError::hashing(format!("Invalid argon2 parameters: {}", e)))?;

        Ok(Self { params })
    }

    #[inline]
    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::hashing(format!("Password hash failed: {}", e)))
    }

    fn compare(&self, hashed: &str, plaintext: &str) -> DomainResult<bool> {
        let parsed = PasswordHash::new(hashed)
            .map_err(|e| DomainError::hashing(format!("Invalid hash format: {}", e)))?;

        // Verification reads the cost parameters from the PHC string itself.
        Ok(self
            .argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }
}
