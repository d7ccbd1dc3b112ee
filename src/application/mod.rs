//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by coordinating repository calls
//! and aggregate mutations. They consume repository traits and provide a
//! clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Account creation and lookup
//! - [`services::item_service::ItemService`] - Catalog queries
//! - [`services::cart_service::CartService`] - Cart add/remove with total recomputation
//! - [`services::order_service::OrderService`] - Order submission and history

pub mod services;
