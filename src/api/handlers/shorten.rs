//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::debug;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/v1/shortURL`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.example.com/test" }
/// ```
///
/// # Response
///
/// `201 Created`, also when the URL was shortened before:
///
/// ```json
/// {
///   "short_url": "http://localhost:8080/abcd1234",
///   "short_code": "abcd1234",
///   "long_url": "https://www.example.com/test"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON for this shape, or
/// if the URL is empty or invalid.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "Rejected shorten body");
        AppError::bad_request("invalid JSON body")
    })?;

    let short_code = state.link_service.shorten(&request.url)?;

    let response = ShortenResponse {
        short_url: state.short_url(&short_code),
        short_code,
        long_url: request.url,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
