//! DTOs for cart modification endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::item::ItemResponse;
use crate::domain::entities::Cart;

/// Body shared by `addToCart` and `removeFromCart`.
///
/// ```json
/// { "username": "test", "itemId": 1, "quantity": 2 }
/// ```
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ModifyCartRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    pub item_id: i64,

    /// Bounded by the cart's own item limit.
    #[validate(range(min = 0, max = 1000, message = "Quantity must be between 0 and 1000"))]
    pub quantity: i32,
}

/// Cart contents after a modification.
///
/// Items are listed once per unit, in insertion order.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub id: i64,
    pub username: String,
    pub items: Vec<ItemResponse>,
    pub total: Decimal,
}

impl CartResponse {
    pub fn new(cart: Cart, username: String) -> Self {
        Self {
            id: cart.id,
            username,
            items: cart.items.into_iter().map(ItemResponse::from).collect(),
            total: cart.total,
        }
    }
}
