#![allow(dead_code)]

use axum_test::TestServer;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use shop_backend::domain::entities::{NewItem, NewUser, User};
use shop_backend::domain::password::PasswordHasher;
use shop_backend::domain::repositories::UserRepository;
use shop_backend::error::AppError;
use shop_backend::infrastructure::memory::InMemoryStore;
use shop_backend::infrastructure::persistence::PgUserRepository;
use shop_backend::routes::router;
use shop_backend::state::{AppState, Repositories};
use sqlx::PgPool;
use std::sync::Arc;

pub const USERNAME: &str = "test";
pub const PASSWORD: &str = "testPassword";

/// Deterministic stand-in for Argon2 so handler tests stay fast.
pub struct FakeHasher;

impl PasswordHasher for FakeHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        Ok(format!("hashed:{}", plaintext.chars().rev().collect::<String>()))
    }
}

/// State over a fresh in-memory store seeded with the demo catalog
/// (id 1 = Round Widget 2.99, id 2 = Square Widget 1.99).
pub async fn create_test_state() -> AppState {
    let store = InMemoryStore::with_demo_catalog().await.unwrap();
    AppState::new(
        Repositories::in_memory(Arc::new(store)),
        Arc::new(FakeHasher),
        "memory",
    )
}

pub async fn create_test_server() -> TestServer {
    TestServer::new(router(create_test_state().await)).unwrap()
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    AppState::new(
        Repositories::postgres(Arc::new(pool)),
        Arc::new(FakeHasher),
        "postgres",
    )
}

/// Creates a user through the API and returns the response body.
pub async fn create_user(server: &TestServer, username: &str) -> Value {
    let response = server
        .post("/api/user/create")
        .json(&json!({
            "username": username,
            "password": PASSWORD,
            "confirmPassword": PASSWORD,
        }))
        .await;

    response.assert_status_ok();
    response.json::<Value>()
}

pub async fn add_to_cart(server: &TestServer, username: &str, item_id: i64, quantity: i32) -> Value {
    let response = server
        .post("/api/cart/addToCart")
        .json(&json!({ "username": username, "itemId": item_id, "quantity": quantity }))
        .await;

    response.assert_status_ok();
    response.json::<Value>()
}

pub async fn insert_user(pool: &PgPool, username: &str) -> User {
    PgUserRepository::new(Arc::new(pool.clone()))
        .create(NewUser {
            username: username.to_string(),
            password_hash: "hashed".to_string(),
        })
        .await
        .unwrap()
}

pub fn new_item(name: &str, cents: i64) -> NewItem {
    NewItem {
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        description: format!("Testing {name}"),
    }
}
