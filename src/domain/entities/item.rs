//! Catalog item entity.

use rust_decimal::Decimal;

/// A purchasable catalog entry.
///
/// Items are immutable from the cart and order perspective: carts and orders
/// hold copies, never mutable references.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
}

impl Item {
    /// Creates a new Item instance.
    pub fn new(id: i64, name: String, price: Decimal, description: String) -> Self {
        Self {
            id,
            name,
            price,
            description,
        }
    }
}

/// Input data for adding an item to the catalog.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub price: Decimal,
    pub description: String,
}
