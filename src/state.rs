//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{CartService, ItemService, OrderService, UserService};
use crate::domain::password::PasswordHasher;
use crate::domain::repositories::{
    CartRepository, ItemRepository, OrderRepository, StorageHealth, UserRepository,
};
use crate::infrastructure::memory::InMemoryStore;
use crate::infrastructure::persistence::{
    PgCartRepository, PgItemRepository, PgOrderRepository, PgStorageHealth, PgUserRepository,
};

/// Repository set backing one [`AppState`].
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub items: Arc<dyn ItemRepository>,
    pub carts: Arc<dyn CartRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub health: Arc<dyn StorageHealth>,
}

impl Repositories {
    /// PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            items: Arc::new(PgItemRepository::new(pool.clone())),
            carts: Arc::new(PgCartRepository::new(pool.clone())),
            orders: Arc::new(PgOrderRepository::new(pool.clone())),
            health: Arc::new(PgStorageHealth::new(pool)),
        }
    }

    /// Every repository served by the same in-memory store.
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            users: store.clone(),
            items: store.clone(),
            carts: store.clone(),
            orders: store.clone(),
            health: store,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub item_service: Arc<ItemService>,
    pub cart_service: Arc<CartService>,
    pub order_service: Arc<OrderService>,
    pub storage_health: Arc<dyn StorageHealth>,
    /// Name of the storage backend, reported by the health check.
    pub storage_backend: &'static str,
}

impl AppState {
    pub fn new(
        repositories: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        storage_backend: &'static str,
    ) -> Self {
        let Repositories {
            users,
            items,
            carts,
            orders,
            health,
        } = repositories;

        Self {
            user_service: Arc::new(UserService::new(users.clone(), password_hasher)),
            item_service: Arc::new(ItemService::new(items.clone())),
            cart_service: Arc::new(CartService::new(users.clone(), items, carts)),
            order_service: Arc::new(OrderService::new(users, orders)),
            storage_health: health,
            storage_backend,
        }
    }
}
