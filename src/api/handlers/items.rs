//! Handlers for catalog endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::item::ItemResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the whole catalog.
///
/// # Endpoint
///
/// `GET /api/item`
pub async fn list_items_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let items = state.item_service.list_items().await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Fetches one item.
///
/// # Endpoint
///
/// `GET /api/item/{id}`
///
/// # Errors
///
/// Returns 404 Not Found with an empty body if the ID is unknown.
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ItemResponse>, AppError> {
    let item = state.item_service.get_item_by_id(id).await?;
    Ok(Json(item.into()))
}

/// Lists items with exactly this name.
///
/// # Endpoint
///
/// `GET /api/item/name/{name}`
///
/// No match returns 200 with an empty list.
pub async fn get_items_by_name_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let items = state.item_service.get_items_by_name(&name).await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}
