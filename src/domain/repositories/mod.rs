//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern.
//! Services depend on them as `Arc<dyn ...>` so storage can be swapped
//! between PostgreSQL and the in-memory store.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence` and
//!   `crate::infrastructure::memory`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User lookup and creation (with cart)
//! - [`ItemRepository`] - Catalog queries
//! - [`CartRepository`] - Cart persistence
//! - [`OrderRepository`] - Order history
//! - [`StorageHealth`] - Backend reachability

pub mod cart_repository;
pub mod item_repository;
pub mod order_repository;
pub mod storage_health;
pub mod user_repository;

pub use cart_repository::CartRepository;
pub use item_repository::ItemRepository;
pub use order_repository::OrderRepository;
pub use storage_health::StorageHealth;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use cart_repository::MockCartRepository;
#[cfg(test)]
pub use item_repository::MockItemRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use storage_health::MockStorageHealth;
#[cfg(test)]
pub use user_repository::MockUserRepository;
