//! HTTP error handling.
//!
//! Errors render as plain text. Client errors carry their own message;
//! everything else is logged and replaced by the operation's generic
//! message.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use eventdesk_domain::EventDeskError;

use crate::utils::logging::error_label;

/// Application error type for HTTP handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    /// Response status.
    pub status: StatusCode,
    /// Plain-text response body.
    pub message: String,
}

impl AppError {
    /// 400 with `message` as the body.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }

    /// 500 with `message` as the body.
    pub fn internal(message: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: message.into() }
    }

    /// Map a domain error for `operation`.
    ///
    /// `InvalidInput` and `NotFound` become 400 with their message. Anything
    /// else is logged in full and becomes 500 with `fallback`.
    pub fn from_domain(error: EventDeskError, operation: &str, fallback: &str) -> Self {
        if error.is_client_error() {
            return Self::bad_request(error.to_string());
        }

        tracing::error!(
            operation,
            error_type = error_label(&error),
            error = %error,
            "request failed"
        );
        Self::internal(fallback)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}
