//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Users, catalog items, carts and orders
//! - [`repositories`] - Data access trait definitions
//! - [`password`] - Password hashing contract
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Cart Lifecycle
//!
//! 1. A [`entities::User`] is created together with an empty [`entities::Cart`]
//! 2. The cart is mutated by add/remove operations, its total recomputed each time
//! 3. Submitting copies the cart into a [`entities::NewOrder`] snapshot
//! 4. The persisted [`entities::UserOrder`] is history and never changes

pub mod entities;
pub mod password;
pub mod repositories;
