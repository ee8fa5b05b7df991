#![allow(dead_code)]

use axum::http::{HeaderName, HeaderValue, header};
use axum_test::TestServer;
use std::sync::Arc;
use user_directory::api::middleware::Pipeline;
use user_directory::domain::UserStore;
use user_directory::infrastructure::persistence::InMemoryUserRepository;
use user_directory::routes::api_router;
use user_directory::state::AppState;

pub const TEST_TOKEN: &str = "test-token";

pub fn create_test_state(store: UserStore) -> AppState {
    AppState::new(Arc::new(InMemoryUserRepository::new(store)))
}

/// Full application (pipeline included) over a store seeded with ids 1 and 2.
pub fn make_server() -> TestServer {
    make_server_with(UserStore::seeded())
}

pub fn make_server_with(store: UserStore) -> TestServer {
    let app = api_router(create_test_state(store), &Pipeline::standard(TEST_TOKEN));
    TestServer::new(app).unwrap()
}

pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    )
}

pub fn auth() -> (HeaderName, HeaderValue) {
    bearer(TEST_TOKEN)
}
