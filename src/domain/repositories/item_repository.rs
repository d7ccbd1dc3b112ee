//! Repository trait for the item catalog.

use crate::domain::entities::{Item, NewItem};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for catalog items.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgItemRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Returns the whole catalog, ordered by ID.
    async fn find_all(&self) -> Result<Vec<Item>, AppError>;

    /// Finds an item by database ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, AppError>;

    /// Returns all items whose name equals `name`.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, AppError>;

    /// Adds an item to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_item: NewItem) -> Result<Item, AppError>;
}
