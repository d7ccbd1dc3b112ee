//! Handlers for cart modification endpoints.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::cart::{CartResponse, ModifyCartRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Appends `quantity` units of an item to the user's cart.
///
/// # Endpoint
///
/// `POST /api/cart/addToCart`
///
/// # Request Body
///
/// ```json
/// { "username": "test", "itemId": 1, "quantity": 2 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a negative quantity or empty username.
/// Returns 404 Not Found with an empty body if the user or item is unknown.
pub async fn add_to_cart_handler(
    State(state): State<AppState>,
    Json(payload): Json<ModifyCartRequest>,
) -> Result<Json<CartResponse>, AppError> {
    payload.validate()?;

    let cart = state
        .cart_service
        .add_to_cart(&payload.username, payload.item_id, payload.quantity)
        .await?;

    Ok(Json(CartResponse::new(cart, payload.username)))
}

/// Removes up to `quantity` units of an item from the user's cart.
///
/// # Endpoint
///
/// `POST /api/cart/removeFromCart`
///
/// Asking for more units than the cart holds removes all of them.
///
/// # Errors
///
/// Returns 400 Bad Request for a negative quantity or empty username.
/// Returns 404 Not Found with an empty body if the user or item is unknown.
pub async fn remove_from_cart_handler(
    State(state): State<AppState>,
    Json(payload): Json<ModifyCartRequest>,
) -> Result<Json<CartResponse>, AppError> {
    payload.validate()?;

    let cart = state
        .cart_service
        .remove_from_cart(&payload.username, payload.item_id, payload.quantity)
        .await?;

    Ok(Json(CartResponse::new(cart, payload.username)))
}
