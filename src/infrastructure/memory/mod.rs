//! In-process storage backend.
//!
//! [`InMemoryStore`] implements every repository trait over a single lock.
//! It backs `STORAGE_BACKEND=memory` and the HTTP handler tests.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Cart, Item, NewItem, NewOrder, NewUser, User, UserOrder};
use crate::domain::repositories::{
    CartRepository, ItemRepository, OrderRepository, StorageHealth, UserRepository,
};
use crate::error::AppError;

#[derive(Debug, Default)]
struct State {
    items: BTreeMap<i64, Item>,
    users: BTreeMap<i64, User>,
    orders: Vec<UserOrder>,
    next_item_id: i64,
    next_user_id: i64,
    next_cart_id: i64,
    next_order_id: i64,
}

fn next(seq: &mut i64) -> i64 {
    *seq += 1;
    *seq
}

/// Repository implementation holding everything in memory.
///
/// Data lives for the lifetime of the value. IDs start at 1 per entity type.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with the demo catalog.
    ///
    /// Contains the same two widgets the PostgreSQL migrations seed.
    pub async fn with_demo_catalog() -> Result<Self, AppError> {
        let store = Self::new();
        for new_item in demo_catalog() {
            ItemRepository::create(&store, new_item).await?;
        }
        Ok(store)
    }
}

/// Catalog rows seeded into fresh databases.
pub fn demo_catalog() -> Vec<NewItem> {
    vec![
        NewItem {
            name: "Round Widget".to_string(),
            price: Decimal::new(299, 2),
            description: "A widget that is round".to_string(),
        },
        NewItem {
            name: "Square Widget".to_string(),
            price: Decimal::new(199, 2),
            description: "A widget that is square".to_string(),
        },
    ]
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .state
            .read()
            .await
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut state = self.state.write().await;

        if state
            .users
            .values()
            .any(|user| user.username == new_user.username)
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "users_username_key" }),
            ));
        }

        let user_id = next(&mut state.next_user_id);
        let cart_id = next(&mut state.next_cart_id);
        let user = User::new(
            user_id,
            new_user.username,
            new_user.password_hash,
            Cart::empty(cart_id, user_id),
        );

        state.users.insert(user_id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl ItemRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Item>, AppError> {
        Ok(self.state.read().await.items.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, AppError> {
        Ok(self.state.read().await.items.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, AppError> {
        Ok(self
            .state
            .read()
            .await
            .items
            .values()
            .filter(|item| item.name == name)
            .cloned()
            .collect())
    }

    async fn create(&self, new_item: NewItem) -> Result<Item, AppError> {
        let mut state = self.state.write().await;
        let id = next(&mut state.next_item_id);
        let item = Item::new(id, new_item.name, new_item.price, new_item.description);
        state.items.insert(id, item.clone());
        Ok(item)
    }
}

#[async_trait]
impl CartRepository for InMemoryStore {
    async fn save(&self, cart: &Cart) -> Result<Cart, AppError> {
        let mut state = self.state.write().await;

        let owner = state
            .users
            .get_mut(&cart.user_id)
            .filter(|user| user.cart.id == cart.id)
            .ok_or_else(|| AppError::not_found("Cart not found", json!({ "id": cart.id })))?;

        owner.cart = cart.clone();
        Ok(owner.cart.clone())
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn save(&self, new_order: NewOrder) -> Result<UserOrder, AppError> {
        let mut state = self.state.write().await;
        let order = UserOrder {
            id: next(&mut state.next_order_id),
            user_id: new_order.user_id,
            items: new_order.items,
            total: new_order.total,
            created_at: Utc::now(),
        };
        state.orders.push(order.clone());
        Ok(order)
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<UserOrder>, AppError> {
        Ok(self
            .state
            .read()
            .await
            .orders
            .iter()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl StorageHealth for InMemoryStore {
    async fn health_check(&self) -> Result<(), AppError> {
        drop(self.state.read().await);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: "hashed".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_with_empty_cart() {
        let store = InMemoryStore::new();

        let user = UserRepository::create(&store, new_user("test")).await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.cart.user_id, user.id);
        assert!(user.cart.is_empty());

        let found = store.find_by_username("test").await.unwrap().unwrap();
        assert_eq!(found, user);
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let store = InMemoryStore::new();
        UserRepository::create(&store, new_user("test")).await.unwrap();

        let result = UserRepository::create(&store, new_user("test")).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_demo_catalog_order_and_lookup() {
        let store = InMemoryStore::with_demo_catalog().await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Round Widget");
        assert_eq!(all[1].name, "Square Widget");

        let by_name = store.find_by_name("Square Widget").await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].price, Decimal::new(199, 2));

        assert!(store.find_by_name("Widget").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cart_save_round_trips_through_user() {
        let store = InMemoryStore::with_demo_catalog().await.unwrap();
        let user = UserRepository::create(&store, new_user("test")).await.unwrap();
        let item = ItemRepository::find_by_id(&store, 1).await.unwrap().unwrap();

        let mut cart = user.cart.clone();
        cart.add_item(&item, 2).unwrap();
        CartRepository::save(&store, &cart).await.unwrap();

        let reloaded = UserRepository::find_by_id(&store, user.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.cart.items.len(), 2);
        assert_eq!(reloaded.cart.total, Decimal::new(598, 2));
    }

    #[tokio::test]
    async fn test_cart_save_unknown_cart() {
        let store = InMemoryStore::new();

        let result = CartRepository::save(&store, &Cart::empty(3, 3)).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_health_check() {
        assert!(InMemoryStore::new().health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_orders_filtered_by_user_in_insertion_order() {
        let store = InMemoryStore::new();

        for (user_id, cents) in [(1, 2245), (2, 500), (1, 1099)] {
            OrderRepository::save(
                &store,
                NewOrder {
                    user_id,
                    items: vec![],
                    total: Decimal::new(cents, 2),
                },
            )
            .await
            .unwrap();
        }

        let history = store.find_by_user(1).await.unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].total, Decimal::new(2245, 2));
        assert_eq!(history[1].total, Decimal::new(1099, 2));
        assert!(history[0].id < history[1].id);
    }
}
