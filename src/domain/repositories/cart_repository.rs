//! Repository trait for cart persistence.

use crate::domain::entities::Cart;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for carts.
///
/// Carts are created with their user (see
/// [`crate::domain::repositories::UserRepository::create`]) and loaded with
/// it, so the only operation needed here is saving a mutated cart.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Replaces the stored contents and total of `cart`.
    ///
    /// Concurrent saves of the same cart are last-write-wins.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the cart does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, cart: &Cart) -> Result<Cart, AppError>;
}
