//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`User`] - An account owning exactly one cart
//! - [`Item`] - A catalog entry
//! - [`Cart`] - A user's pending selection of items
//! - [`UserOrder`] - An immutable snapshot of a submitted cart
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewUser`, `NewItem`, `NewOrder` - For creating new records

pub mod cart;
pub mod item;
pub mod order;
pub mod user;

pub use cart::Cart;
pub use item::{Item, NewItem};
pub use order::{NewOrder, UserOrder};
pub use user::{NewUser, User};
