//! Repository trait for order history.

use crate::domain::entities::{NewOrder, UserOrder};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for submitted orders.
///
/// Orders are append-only: there is no update or delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists an order snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, new_order: NewOrder) -> Result<UserOrder, AppError>;

    /// Lists all orders of a user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_user(&self, user_id: i64) -> Result<Vec<UserOrder>, AppError>;
}
