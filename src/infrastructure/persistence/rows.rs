//! Row types shared by the PostgreSQL repositories.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::entities::Item;

#[derive(Debug, sqlx::FromRow)]
pub(super) struct ItemRow {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item::new(row.id, row.name, row.price, row.description)
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct UserRow {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub cart_id: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct OrderRow {
    pub id: i64,
    pub user_id: i64,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct OrderItemRow {
    pub order_id: i64,
    pub item_id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
}

impl From<OrderItemRow> for Item {
    fn from(row: OrderItemRow) -> Self {
        Item::new(row.item_id, row.name, row.price, row.description)
    }
}
