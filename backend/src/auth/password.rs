//! Password hashing
//!
//! Stored credentials come in two formats:
//! - unsalted SHA-256 hex digests (the default, kept so existing rows keep
//!   verifying; the same plaintext always yields the same digest)
//! - argon2id PHC strings, used for new registrations when the
//!   `argon2` scheme is configured
//!
//! `verify` recognises either format regardless of the configured scheme.

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Prefix of an argon2 PHC string
const ARGON2_PREFIX: &str = "$argon2";

/// Hashing scheme for newly stored passwords
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    /// Unsalted SHA-256, lower-case hex
    #[default]
    Sha256,
    /// Salted argon2id
    Argon2,
}

/// Password hashing service
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    scheme: PasswordScheme,
}

impl PasswordService {
    pub fn new(scheme: PasswordScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> PasswordScheme {
        self.scheme
    }

    /// Hash a password with the configured scheme (blocking operation)
    pub fn hash(&self, password: &str) -> Result<String> {
        match self.scheme {
            PasswordScheme::Sha256 => Ok(sha256_hex(password)),
            PasswordScheme::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                let hash = Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
                Ok(hash.to_string())
            }
        }
    }

    /// Hash a password on the blocking thread pool
    pub async fn hash_async(&self, password: String) -> Result<String> {
        let service = *self;
        tokio::task::spawn_blocking(move || service.hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a stored digest (blocking operation)
    pub fn verify(password: &str, stored: &str) -> Result<bool> {
        if stored.starts_with(ARGON2_PREFIX) {
            let parsed = PasswordHash::new(stored)
                .map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))?;
            return Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok());
        }

        Ok(sha256_hex(password) == stored)
    }

    /// Verify a password on the blocking thread pool
    pub async fn verify_async(password: String, stored: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &stored))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(PasswordScheme::default())
    }
}

fn sha256_hex(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
