//! Handlers for requests that match no route or no method.

use crate::error::AppError;

/// Answers a known path requested with the wrong HTTP method.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}

/// Answers paths that cannot be a short code, such as `/a/b`.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("short URL not found")
}
