//! Handlers for user account endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::user::{CreateUserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user together with an empty cart.
///
/// # Endpoint
///
/// `POST /api/user/create`
///
/// # Request Body
///
/// ```json
/// { "username": "test", "password": "testPassword", "confirmPassword": "testPassword" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the username is empty, the password is shorter
/// than 7 characters, or the confirmation does not match.
/// Returns 409 Conflict if the username is taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .create_user(
            &payload.username,
            &payload.password,
            &payload.confirm_password,
        )
        .await?;

    Ok(Json(user.into()))
}

/// Looks a user up by ID.
///
/// # Endpoint
///
/// `GET /api/user/id/{id}`
///
/// # Errors
///
/// Returns 404 Not Found with an empty body if no user has this ID.
pub async fn find_user_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.find_by_id(id).await?;
    Ok(Json(user.into()))
}

/// Looks a user up by username.
///
/// # Endpoint
///
/// `GET /api/user/{username}`
///
/// # Errors
///
/// Returns 404 Not Found with an empty body if the username is unknown.
pub async fn find_user_by_username_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.find_by_username(&username).await?;
    Ok(Json(user.into()))
}
