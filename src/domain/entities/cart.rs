//! Cart aggregate: a user's pending selection of catalog items.

use rust_decimal::Decimal;
use serde_json::json;

use super::item::Item;
use crate::error::AppError;

/// A user's shopping cart.
///
/// Quantity is modeled as repeated entries in `items`, in insertion order.
/// `total` always equals the sum of the contained prices: every mutation
/// recomputes it from the item sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: i64,
    pub user_id: i64,
    pub items: Vec<Item>,
    pub total: Decimal,
}

impl Cart {
    /// Upper bound on the number of entries a cart may hold.
    pub const MAX_ITEMS: usize = 1000;

    /// Creates an empty cart for a user.
    pub fn empty(id: i64, user_id: i64) -> Self {
        Self {
            id,
            user_id,
            items: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// Rebuilds a cart from stored items, deriving the total.
    pub fn with_items(id: i64, user_id: i64, items: Vec<Item>) -> Self {
        let mut cart = Self {
            id,
            user_id,
            items,
            total: Decimal::ZERO,
        };
        cart.recompute_total();
        cart
    }

    /// Appends `quantity` copies of `item`.
    ///
    /// Non-positive quantities leave the item sequence untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] and leaves the cart unchanged if the
    /// result would exceed [`Cart::MAX_ITEMS`] entries.
    pub fn add_item(&mut self, item: &Item, quantity: i32) -> Result<(), AppError> {
        let copies = usize::try_from(quantity).unwrap_or(0);

        if copies > Self::MAX_ITEMS.saturating_sub(self.items.len()) {
            return Err(AppError::bad_request(
                "Cart item limit exceeded",
                json!({
                    "limit": Self::MAX_ITEMS,
                    "current": self.items.len(),
                    "requested": quantity,
                }),
            ));
        }

        self.items.extend(std::iter::repeat_n(item, copies).cloned());
        self.recompute_total();
        Ok(())
    }

    /// Removes up to `quantity` occurrences of the item with `item_id`.
    ///
    /// Earliest occurrences go first. Asking for more than the cart holds
    /// removes every occurrence and stops there. Returns how many entries
    /// were removed.
    pub fn remove_item(&mut self, item_id: i64, quantity: i32) -> usize {
        let mut remaining = usize::try_from(quantity).unwrap_or(0);
        let before = self.items.len();

        self.items.retain(|entry| {
            if remaining > 0 && entry.id == item_id {
                remaining -= 1;
                false
            } else {
                true
            }
        });

        self.recompute_total();
        before - self.items.len()
    }

    /// Number of occurrences of `item_id` in the cart.
    pub fn count_of(&self, item_id: i64) -> usize {
        self.items.iter().filter(|entry| entry.id == item_id).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(|entry| entry.price).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_widget() -> Item {
        Item::new(
            1,
            "Item One".to_string(),
            Decimal::new(299, 2),
            "Item One Description.".to_string(),
        )
    }

    fn square_widget() -> Item {
        Item::new(
            2,
            "Item Two".to_string(),
            Decimal::new(455, 2),
            "Item Two Description".to_string(),
        )
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::empty(7, 3);

        assert_eq!(cart.id, 7);
        assert_eq!(cart.user_id, 3);
        assert!(cart.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);
    }

    #[test]
    fn test_add_then_remove_walkthrough() {
        let mut cart = Cart::empty(1, 0);
        let item = round_widget();

        cart.add_item(&item, 2).unwrap();
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total, Decimal::new(598, 2));

        assert_eq!(cart.remove_item(1, 1), 1);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total, Decimal::new(299, 2));

        assert_eq!(cart.remove_item(1, 1), 1);
        assert!(cart.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);
    }

    #[test]
    fn test_add_scales_total_by_quantity() {
        let mut cart = Cart::empty(1, 0);
        cart.add_item(&square_widget(), 1).unwrap();

        let before = cart.total;
        cart.add_item(&round_widget(), 3).unwrap();

        assert_eq!(cart.items.len(), 4);
        assert_eq!(cart.total - before, Decimal::from(3) * Decimal::new(299, 2));
    }

    #[test]
    fn test_over_removal_clamps_to_zero() {
        let mut cart = Cart::empty(1, 0);
        cart.add_item(&round_widget(), 2).unwrap();
        cart.add_item(&square_widget(), 1).unwrap();

        let removed = cart.remove_item(1, 10);

        assert_eq!(removed, 2);
        assert_eq!(cart.count_of(1), 0);
        assert_eq!(cart.count_of(2), 1);
        assert_eq!(cart.total, Decimal::new(455, 2));
    }

    #[test]
    fn test_remove_keeps_order_of_remaining_items() {
        let mut cart = Cart::empty(1, 0);
        cart.add_item(&round_widget(), 1).unwrap();
        cart.add_item(&square_widget(), 1).unwrap();
        cart.add_item(&round_widget(), 1).unwrap();

        cart.remove_item(1, 1);

        let ids: Vec<i64> = cart.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_non_positive_quantity_is_noop() {
        let mut cart = Cart::empty(1, 0);
        cart.add_item(&round_widget(), 1).unwrap();

        cart.add_item(&round_widget(), 0).unwrap();
        cart.add_item(&round_widget(), -3).unwrap();
        assert_eq!(cart.remove_item(1, -1), 0);

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total, Decimal::new(299, 2));
    }

    #[test]
    fn test_remove_missing_item_changes_nothing() {
        let mut cart = Cart::empty(1, 0);
        cart.add_item(&square_widget(), 2).unwrap();

        assert_eq!(cart.remove_item(99, 1), 0);
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total, Decimal::new(910, 2));
    }

    #[test]
    fn test_add_beyond_limit_rejected() {
        let mut cart = Cart::empty(1, 0);
        cart.add_item(&round_widget(), 999).unwrap();

        let result = cart.add_item(&round_widget(), i32::MAX);
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));

        let result = cart.add_item(&square_widget(), 2);
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));

        assert_eq!(cart.items.len(), 999);
        assert_eq!(cart.count_of(2), 0);

        cart.add_item(&square_widget(), 1).unwrap();
        assert_eq!(cart.items.len(), Cart::MAX_ITEMS);
    }

    #[test]
    fn test_with_items_derives_total() {
        let cart = Cart::with_items(1, 0, vec![round_widget(), square_widget()]);
        assert_eq!(cart.total, Decimal::new(754, 2));
    }
}
