//! HTTP request handlers for API endpoints.

pub mod not_found;
pub mod users;

pub use not_found::{not_found_handler, route_not_found};
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
