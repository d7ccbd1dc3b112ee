//! PostgreSQL implementation of cart repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Cart;
use crate::domain::repositories::CartRepository;
use crate::error::AppError;

/// PostgreSQL repository for cart contents.
///
/// Saving rewrites the whole `cart_items` sequence in one transaction, so a
/// concurrent save of the same cart simply replaces this one.
pub struct PgCartRepository {
    pool: Arc<PgPool>,
}

impl PgCartRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for PgCartRepository {
    async fn save(&self, cart: &Cart) -> Result<Cart, AppError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE carts
            SET total = $3
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(cart.id)
        .bind(cart.user_id)
        .bind(cart.total)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Cart not found",
                json!({ "id": cart.id, "user_id": cart.user_id }),
            ));
        }

        sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
            .bind(cart.id)
            .execute(&mut *tx)
            .await?;

        for (position, item) in cart.items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO cart_items (cart_id, position, item_id)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(cart.id)
            .bind(position as i32)
            .bind(item.id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(cart.clone())
    }
}
