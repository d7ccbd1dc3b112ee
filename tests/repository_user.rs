mod common;

use common::insert_user;
use shop_backend::domain::entities::NewUser;
use shop_backend::domain::repositories::UserRepository;
use shop_backend::error::AppError;
use shop_backend::infrastructure::persistence::PgUserRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_user_with_empty_cart(pool: PgPool) {
    let user = insert_user(&pool, "test").await;

    assert_eq!(user.username, "test");
    assert_eq!(user.password, "hashed");
    assert_eq!(user.cart.user_id, user.id);
    assert!(user.cart.is_empty());

    let carts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM carts WHERE user_id = $1")
        .bind(user.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(carts, 1);
}

#[sqlx::test]
async fn test_duplicate_username(pool: PgPool) {
    insert_user(&pool, "test").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let result = repo
        .create(NewUser {
            username: "test".to_string(),
            password_hash: "other".to_string(),
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_find_by_id_and_username(pool: PgPool) {
    let created = insert_user(&pool, "test").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let by_id = repo.find_by_id(created.id).await.unwrap();
    let by_name = repo.find_by_username("test").await.unwrap();

    assert_eq!(by_id.as_ref(), Some(&created));
    assert_eq!(by_name, Some(created));
}

#[sqlx::test]
async fn test_find_missing_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(42).await.unwrap().is_none());
    assert!(repo.find_by_username("nobody").await.unwrap().is_none());
}
