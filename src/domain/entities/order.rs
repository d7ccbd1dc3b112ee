//! Order entity: an immutable snapshot of a submitted cart.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{cart::Cart, item::Item};

/// A persisted order.
///
/// Item sequence and total are copies taken at submission time and never
/// change afterwards, whatever happens to the cart or the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct UserOrder {
    pub id: i64,
    pub user_id: i64,
    pub items: Vec<Item>,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Input data for persisting a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: i64,
    pub items: Vec<Item>,
    pub total: Decimal,
}

impl NewOrder {
    /// Snapshots the current contents and total of `cart`.
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            user_id: cart.user_id,
            items: cart.items.clone(),
            total: cart.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_from_cart_is_a_copy() {
        let item = Item::new(
            1,
            "Item One".to_string(),
            Decimal::new(299, 2),
            "Testing item one".to_string(),
        );
        let mut cart = Cart::empty(4, 9);
        cart.add_item(&item, 1).unwrap();

        let order = NewOrder::from_cart(&cart);

        cart.add_item(&item, 5).unwrap();
        cart.remove_item(1, 6);

        assert_eq!(order.user_id, 9);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].name, "Item One");
        assert_eq!(order.total, Decimal::new(299, 2));
        assert!(cart.is_empty());
    }
}
