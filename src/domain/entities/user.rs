//! User entity.

use super::cart::Cart;

/// A registered user.
///
/// `password` holds the hashed representation only. Every user owns exactly
/// one [`Cart`], created together with the user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub cart: Cart,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, username: String, password: String, cart: Cart) -> Self {
        Self {
            id,
            username,
            password,
            cart,
        }
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}
