//! Catalog query service.

use std::sync::Arc;

use crate::domain::entities::Item;
use crate::domain::repositories::ItemRepository;
use crate::error::AppError;
use serde_json::json;

/// Read-only access to the item catalog.
pub struct ItemService {
    item_repository: Arc<dyn ItemRepository>,
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(item_repository: Arc<dyn ItemRepository>) -> Self {
        Self { item_repository }
    }

    /// Lists the whole catalog in repository order.
    ///
    /// An empty catalog is an empty list, not an error.
    pub async fn list_items(&self) -> Result<Vec<Item>, AppError> {
        self.item_repository.find_all().await
    }

    /// Retrieves a single item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this ID.
    pub async fn get_item_by_id(&self, id: i64) -> Result<Item, AppError> {
        self.item_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Item not found", json!({ "id": id })))
    }

    /// Lists items matching `name`.
    ///
    /// No match is a successful empty list.
    pub async fn get_items_by_name(&self, name: &str) -> Result<Vec<Item>, AppError> {
        let items = self.item_repository.find_by_name(name).await?;
        tracing::debug!(name, matches = items.len(), "Item name lookup");
        Ok(items)
    }
}
