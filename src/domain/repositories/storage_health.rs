//! Storage backend reachability check.

use crate::error::AppError;
use async_trait::async_trait;

/// Cheap connectivity check used by `GET /health`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStorageHealth`] - `SELECT 1` on the pool
/// - [`crate::infrastructure::memory::InMemoryStore`] - Always reachable
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageHealth: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend cannot be reached.
    async fn health_check(&self) -> Result<(), AppError>;
}
