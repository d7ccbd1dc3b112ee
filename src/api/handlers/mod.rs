//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod cart;
pub mod health;
pub mod items;
pub mod orders;
pub mod users;

pub use cart::{add_to_cart_handler, remove_from_cart_handler};
pub use health::health_handler;
pub use items::{get_item_handler, get_items_by_name_handler, list_items_handler};
pub use orders::{order_history_handler, submit_order_handler};
pub use users::{create_user_handler, find_user_by_id_handler, find_user_by_username_handler};
