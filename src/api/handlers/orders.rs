//! Handlers for order endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::order::OrderResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Turns the user's current cart into an order.
///
/// # Endpoint
///
/// `POST /api/order/submit/{username}`
///
/// The cart is left unchanged. An empty cart yields an order with no items
/// and a zero total.
///
/// # Errors
///
/// Returns 404 Not Found with an empty body if the username is unknown.
pub async fn submit_order_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state.order_service.submit_order(&username).await?;
    Ok(Json(OrderResponse::new(order, username)))
}

/// Lists the user's submitted orders, oldest first.
///
/// # Endpoint
///
/// `GET /api/order/history/{username}`
///
/// # Errors
///
/// Returns 404 Not Found with an empty body if the username is unknown.
pub async fn order_history_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let orders = state.order_service.get_order_history(&username).await?;

    Ok(Json(
        orders
            .into_iter()
            .map(|order| OrderResponse::new(order, username.clone()))
            .collect(),
    ))
}
