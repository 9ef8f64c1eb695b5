//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/v1/shortURL` - Create a short URL
//! - `GET  /api/v1/health`   - Health check
//! - `GET  /{code}`          - Short link redirect
//! - `GET  /`                - Rejected, no code given
//!
//! Known paths requested with another method answer 405; any other path
//! answers 404. All errors use the JSON body from [`crate::error::AppError`].
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::{
    method_not_allowed_handler, missing_code_handler, not_found_handler, redirect_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::api_routes())
        .route("/", get(missing_code_handler))
        .route("/{code}", get(redirect_handler))
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(ServiceBuilder::new().layer(tracing::layer()))
}
