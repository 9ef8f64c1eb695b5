//! API route configuration.

use crate::api::handlers::{health_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Path of the link creation endpoint.
pub const SHORTEN_PATH: &str = "/api/v1/shortURL";

/// Path of the health check endpoint.
pub const HEALTH_PATH: &str = "/api/v1/health";

/// Versioned API routes.
///
/// # Endpoints
///
/// - `POST /api/v1/shortURL` - Create a short URL
/// - `GET  /api/v1/health`   - Health check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(SHORTEN_PATH, post(shorten_handler))
        .route(HEALTH_PATH, get(health_handler))
}
