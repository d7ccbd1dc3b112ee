//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Request bodies use camelCase field names.

pub mod cart;
pub mod health;
pub mod item;
pub mod order;
pub mod user;
