//! HTTP-facing error type and its JSON representation.
//!
//! Every error response has the body `{"error": "<message>"}`. Only the
//! message text reaches the client; error kinds map to status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::errors::ShortenError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Error returned by HTTP handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// 400 Bad Request
    #[error("{0}")]
    Validation(String),

    /// 404 Not Found
    #[error("{0}")]
    NotFound(String),

    /// 405 Method Not Allowed
    #[error("method not allowed")]
    MethodNotAllowed,

    /// 500 Internal Server Error
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Status code sent for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ShortenError> for AppError {
    fn from(err: ShortenError) -> Self {
        match err {
            ShortenError::EmptyUrl | ShortenError::InvalidUrl => {
                AppError::bad_request(err.to_string())
            }
            ShortenError::NotFound => AppError::not_found(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_errors_map_to_statuses() {
        assert_eq!(
            AppError::from(ShortenError::EmptyUrl).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(ShortenError::InvalidUrl).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(ShortenError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_message_is_carried_over() {
        assert_eq!(
            AppError::from(ShortenError::InvalidUrl).to_string(),
            "invalid URL format"
        );
        assert_eq!(AppError::MethodNotAllowed.to_string(), "method not allowed");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = AppError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
