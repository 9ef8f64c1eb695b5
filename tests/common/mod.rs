#![allow(dead_code)]

use axum_test::TestServer;
use hash_shortener::routes::app_router;
use hash_shortener::state::AppState;
use serde_json::json;

pub const BASE_URL: &str = "http://localhost:8080";

pub fn create_test_state() -> AppState {
    AppState::with_code_length(BASE_URL, 8)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

/// Shortens `url` through the API and returns the short code.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server
        .post("/api/v1/shortURL")
        .json(&json!({ "url": url }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    json["short_code"].as_str().unwrap().to_string()
}
