//! API route configuration.

use crate::api::handlers::{
    add_to_cart_handler, create_user_handler, find_user_by_id_handler,
    find_user_by_username_handler, get_item_handler, get_items_by_name_handler,
    list_items_handler, order_history_handler, remove_from_cart_handler, submit_order_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /user/create`              - Create a user with an empty cart
/// - `GET  /user/id/{id}`             - Look up a user by ID
/// - `GET  /user/{username}`          - Look up a user by username
/// - `GET  /item`                     - List the catalog
/// - `GET  /item/{id}`                - Fetch one item
/// - `GET  /item/name/{name}`         - Items with an exact name
/// - `POST /cart/addToCart`           - Add units of an item to a cart
/// - `POST /cart/removeFromCart`      - Remove units of an item from a cart
/// - `POST /order/submit/{username}`  - Snapshot the cart into an order
/// - `GET  /order/history/{username}` - List a user's orders
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/user/create", post(create_user_handler))
        .route("/user/id/{id}", get(find_user_by_id_handler))
        .route("/user/{username}", get(find_user_by_username_handler))
        .route("/item", get(list_items_handler))
        .route("/item/{id}", get(get_item_handler))
        .route("/item/name/{name}", get(get_items_by_name_handler))
        .route("/cart/addToCart", post(add_to_cart_handler))
        .route("/cart/removeFromCart", post(remove_from_cart_handler))
        .route("/order/submit/{username}", post(submit_order_handler))
        .route("/order/history/{username}", get(order_history_handler))
}
