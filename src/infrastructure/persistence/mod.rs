//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries
//! are checked at runtime against the schema in `migrations/`.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Users with their carts
//! - [`PgItemRepository`] - Catalog
//! - [`PgCartRepository`] - Cart contents and totals
//! - [`PgOrderRepository`] - Order snapshots
//! - [`PgStorageHealth`] - Connectivity check

pub mod pg_cart_repository;
pub mod pg_item_repository;
pub mod pg_order_repository;
pub mod pg_storage_health;
pub mod pg_user_repository;
mod rows;

pub use pg_cart_repository::PgCartRepository;
pub use pg_item_repository::PgItemRepository;
pub use pg_order_repository::PgOrderRepository;
pub use pg_storage_health::PgStorageHealth;
pub use pg_user_repository::PgUserRepository;
