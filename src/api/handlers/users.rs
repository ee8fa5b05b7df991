//! Handlers for user directory endpoints.
//!
//! Each handler resolves store outcomes locally: validation failures become
//! 400 and unknown ids become 404 through [`AppError`]. Nothing expected
//! escapes to the error translation stage.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::user::UserRequest;
use crate::api::extract::{JsonBody, UserId};
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users in insertion order.
///
/// # Endpoint
///
/// `GET /users`
pub async fn list_users_handler(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.user_service.list_users().await)
}

/// Returns a single user.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn get_user_handler(
    UserId(id): UserId,
    State(state): State<AppState>,
) -> Result<Json<User>, AppError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// Responds `201 Created` with the stored user and a `Location: /users/{id}`
/// header. An `id` in the body is ignored.
///
/// # Errors
///
/// Returns 400 if the name is blank, the email is malformed, or the body is
/// not a valid user object.
pub async fn create_user_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_service.create_user(payload.into()).await?;
    let location = format!("/users/{}", user.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

/// Replaces a user's name and email.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
/// Returns 400 if the candidate is invalid.
pub async fn update_user_handler(
    UserId(id): UserId,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserRequest>,
) -> Result<Json<User>, AppError> {
    let user = state.user_service.update_user(id, payload.into()).await?;
    Ok(Json(user))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// Responds `200 OK` with a plain-text confirmation.
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn delete_user_handler(
    UserId(id): UserId,
    State(state): State<AppState>,
) -> Result<String, AppError> {
    state.user_service.delete_user(id).await?;
    Ok(format!("User with ID {id} deleted"))
}
