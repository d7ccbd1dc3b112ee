//! Business logic services for the application layer.

pub mod cart_service;
pub mod item_service;
pub mod order_service;
pub mod user_service;

pub use cart_service::CartService;
pub use item_service::ItemService;
pub use order_service::OrderService;
pub use user_service::UserService;
