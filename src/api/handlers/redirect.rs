//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response
///
/// `302 Found` with the long URL in the `Location` header.
///
/// # Errors
///
/// Returns 400 Bad Request for a blank code.
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.link_service.expand(&code).map_err(|err| {
        debug!(code = %code, error = %err, "Redirect lookup failed");
        AppError::from(err)
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]))
}

/// Handles `GET /`, where no short code was given.
pub async fn missing_code_handler() -> AppError {
    AppError::bad_request("short code is required")
}
