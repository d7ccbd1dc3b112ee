//! PostgreSQL implementation of order repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use super::rows::{OrderItemRow, OrderRow};
use crate::domain::entities::{Item, NewOrder, UserOrder};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

/// PostgreSQL repository for submitted orders.
///
/// Order lines copy the item's name, price and description, so history is
/// unaffected by later catalog changes.
pub struct PgOrderRepository {
    pool: Arc<PgPool>,
}

impl PgOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn save(&self, new_order: NewOrder) -> Result<UserOrder, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO user_orders (user_id, total)
            VALUES ($1, $2)
            RETURNING id, user_id, total, created_at
            "#,
        )
        .bind(new_order.user_id)
        .bind(new_order.total)
        .fetch_one(&mut *tx)
        .await?;

        for (position, item) in new_order.items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, position, item_id, name, price, description)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(row.id)
            .bind(position as i32)
            .bind(item.id)
            .bind(&item.name)
            .bind(item.price)
            .bind(&item.description)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(UserOrder {
            id: row.id,
            user_id: row.user_id,
            items: new_order.items,
            total: row.total,
            created_at: row.created_at,
        })
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<UserOrder>, AppError> {
        let orders = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, total, created_at
            FROM user_orders
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i64> = orders.iter().map(|o| o.id).collect();

        let lines = sqlx::query_as::<_, OrderItemRow>(
            r#"
            SELECT order_id, item_id, name, price, description
            FROM order_items
            WHERE order_id = ANY($1)
            ORDER BY order_id, position
            "#,
        )
        .bind(&order_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut items_by_order: HashMap<i64, Vec<Item>> = HashMap::new();
        for line in lines {
            items_by_order
                .entry(line.order_id)
                .or_default()
                .push(line.into());
        }

        Ok(orders
            .into_iter()
            .map(|o| UserOrder {
                items: items_by_order.remove(&o.id).unwrap_or_default(),
                id: o.id,
                user_id: o.user_id,
                total: o.total,
                created_at: o.created_at,
            })
            .collect())
    }
}
