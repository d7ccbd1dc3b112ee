//! PostgreSQL implementation of item repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::ItemRow;
use crate::domain::entities::{Item, NewItem};
use crate::domain::repositories::ItemRepository;
use crate::error::AppError;

/// PostgreSQL repository for the item catalog.
pub struct PgItemRepository {
    pool: Arc<PgPool>,
}

impl PgItemRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn find_all(&self) -> Result<Vec<Item>, AppError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, price, description
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, AppError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, price, description
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Item::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, AppError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, price, description
            FROM items
            WHERE name = $1
            ORDER BY id
            "#,
        )
        .bind(name)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn create(&self, new_item: NewItem) -> Result<Item, AppError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (name, price, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, description
            "#,
        )
        .bind(new_item.name)
        .bind(new_item.price)
        .bind(new_item.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
