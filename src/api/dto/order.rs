//! DTOs for order endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::api::dto::item::ItemResponse;
use crate::domain::entities::UserOrder;

/// A submitted order: the cart snapshot taken at submission time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub username: String,
    pub items: Vec<ItemResponse>,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

impl OrderResponse {
    pub fn new(order: UserOrder, username: String) -> Self {
        Self {
            id: order.id,
            username,
            items: order.items.into_iter().map(ItemResponse::from).collect(),
            total: order.total,
            created_at: order.created_at,
        }
    }
}
