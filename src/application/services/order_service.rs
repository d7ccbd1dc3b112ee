//! Order submission and history service.

use std::sync::Arc;

use crate::domain::entities::{NewOrder, User, UserOrder};
use crate::domain::repositories::{OrderRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for turning carts into orders and reading order history.
pub struct OrderService {
    user_repository: Arc<dyn UserRepository>,
    order_repository: Arc<dyn OrderRepository>,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        order_repository: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            user_repository,
            order_repository,
        }
    }

    /// Persists the user's current cart as an order.
    ///
    /// The order holds a copy of the cart's items and total. The cart itself
    /// is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn submit_order(&self, username: &str) -> Result<UserOrder, AppError> {
        let user = self.find_user(username).await?;

        let order = self
            .order_repository
            .save(NewOrder::from_cart(&user.cart))
            .await?;

        tracing::info!(
            username,
            order_id = order.id,
            items = order.items.len(),
            total = %order.total,
            "Order submitted"
        );

        Ok(order)
    }

    /// Lists all orders submitted by the user, in repository order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_order_history(&self, username: &str) -> Result<Vec<UserOrder>, AppError> {
        let user = self.find_user(username).await?;
        self.order_repository.find_by_user(user.id).await
    }

    async fn find_user(&self, username: &str) -> Result<User, AppError> {
        self.user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "username": username })))
    }
}
