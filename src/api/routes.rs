//! API route configuration.
//!
//! Authentication is not applied here: every route, and the fallback, sits
//! behind the interceptor pipeline assembled in [`crate::routes`].

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    not_found_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// User directory routes.
///
/// # Endpoints
///
/// - `GET    /users`       - List users
/// - `POST   /users`       - Create a user
/// - `GET    /users/{id}`  - Fetch one user
/// - `PUT    /users/{id}`  - Replace a user's name and email
/// - `DELETE /users/{id}`  - Delete a user
///
/// Any other method or path answers 404.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
}
