//! Password hashing contract.

use crate::error::AppError;

/// Turns a plaintext password into its stored representation.
///
/// # Implementations
///
/// - [`crate::infrastructure::security::Argon2PasswordHasher`] - Argon2id with random salt
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hashes `plaintext`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if hashing fails.
    fn hash(&self, plaintext: &str) -> Result<String, AppError>;
}
