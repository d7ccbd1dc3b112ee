//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{ItemRow, UserRow};
use crate::domain::entities::{Cart, Item, NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for users and their carts.
///
/// A user row is always paired with exactly one `carts` row; both are
/// inserted in one transaction.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Loads the cart contents for a user row.
    async fn hydrate(&self, row: UserRow) -> Result<User, AppError> {
        let items = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT i.id, i.name, i.price, i.description
            FROM cart_items ci
            JOIN items i ON i.id = ci.item_id
            WHERE ci.cart_id = $1
            ORDER BY ci.position
            "#,
        )
        .bind(row.cart_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let cart = Cart::with_items(
            row.cart_id,
            row.id,
            items.into_iter().map(Item::from).collect(),
        );

        Ok(User::new(row.id, row.username, row.password, cart))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT u.id, u.username, u.password, c.id AS cart_id
            FROM users u
            JOIN carts c ON c.user_id = u.id
            WHERE u.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT u.id, u.username, u.password, c.id AS cart_id
            FROM users u
            JOIN carts c ON c.user_id = u.id
            WHERE u.username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;

        let user_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .fetch_one(&mut *tx)
        .await?;

        let cart_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO carts (user_id)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(User::new(
            user_id,
            new_user.username,
            new_user.password_hash,
            Cart::empty(cart_id, user_id),
        ))
    }
}
