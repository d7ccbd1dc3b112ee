//! Argon2id implementation of [`PasswordHasher`].

use argon2::{
    Argon2,
    password_hash::{self, SaltString, rand_core::OsRng},
};
use serde_json::json;

use crate::domain::password::PasswordHasher;
use crate::error::AppError;

/// Hashes passwords with Argon2id and a fresh random salt.
///
/// Output is a PHC string (`$argon2id$v=19$...`), so the salt and
/// parameters travel with the hash.
#[derive(Debug, Default, Clone)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        password_hash::PasswordHasher::hash_password(
            &Argon2::default(),
            plaintext.as_bytes(),
            &salt,
        )
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            AppError::internal("Password hashing failed", json!({}))
        })
    }
}
