//! DTOs for catalog endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::Item;

/// Catalog item. `price` serializes as a decimal string, e.g. `"2.99"`.
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            description: item.description,
        }
    }
}
