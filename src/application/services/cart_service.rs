//! Cart modification service.

use std::sync::Arc;

use crate::domain::entities::{Cart, Item, User};
use crate::domain::repositories::{CartRepository, ItemRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for adding and removing items in a user's cart.
///
/// Both operations resolve the user and the item first; a miss on either
/// fails with [`AppError::NotFound`] before anything is saved. Concurrent
/// modifications of one cart are not coordinated: the last save wins.
pub struct CartService {
    user_repository: Arc<dyn UserRepository>,
    item_repository: Arc<dyn ItemRepository>,
    cart_repository: Arc<dyn CartRepository>,
}

impl CartService {
    /// Creates a new cart service.
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        item_repository: Arc<dyn ItemRepository>,
        cart_repository: Arc<dyn CartRepository>,
    ) -> Self {
        Self {
            user_repository,
            item_repository,
            cart_repository,
        }
    }

    /// Appends `quantity` copies of an item to the user's cart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user or the item does not exist.
    /// Returns [`AppError::Validation`] if the cart would exceed [`Cart::MAX_ITEMS`].
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn add_to_cart(
        &self,
        username: &str,
        item_id: i64,
        quantity: i32,
    ) -> Result<Cart, AppError> {
        let (user, item) = self.resolve(username, item_id).await?;

        let mut cart = user.cart;
        if let Err(e) = cart.add_item(&item, quantity) {
            tracing::warn!(username, item_id, quantity, "Cart item limit exceeded");
            return Err(e);
        }

        let saved = self.cart_repository.save(&cart).await?;

        tracing::info!(
            username,
            item_id,
            quantity,
            items = saved.items.len(),
            total = %saved.total,
            "Added to cart"
        );

        Ok(saved)
    }

    /// Removes up to `quantity` occurrences of an item from the user's cart.
    ///
    /// Removing more than the cart holds empties it of that item without error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user or the item does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn remove_from_cart(
        &self,
        username: &str,
        item_id: i64,
        quantity: i32,
    ) -> Result<Cart, AppError> {
        let (user, item) = self.resolve(username, item_id).await?;

        let mut cart = user.cart;
        let removed = cart.remove_item(item.id, quantity);

        let saved = self.cart_repository.save(&cart).await?;

        tracing::info!(
            username,
            item_id,
            requested = quantity,
            removed,
            remaining = saved.count_of(item_id),
            items = saved.items.len(),
            total = %saved.total,
            "Removed from cart"
        );

        Ok(saved)
    }

    async fn resolve(&self, username: &str, item_id: i64) -> Result<(User, Item), AppError> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                AppError::not_found("User not found", json!({ "username": username }))
            })?;

        let item = self
            .item_repository
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::not_found("Item not found", json!({ "id": item_id })))?;

        Ok((user, item))
    }
}
