//! Error types for creatorhub-server
//!
//! Four caller-facing kinds, surfaced directly with no retry:
//! AuthenticationRequired, PermissionDenied, NotFound and ValidationError.
//! Storage and other internal failures become a 500 whose cause is logged
//! but never sent to the client.
//! PermissionDenied and ValidationError carry the path of a safe view the
//! client should return to.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;

/// Where unauthenticated clients are sent
pub const LOGIN_PATH: &str = "/login/";

/// Client-facing text for every 500; the cause is only logged
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// No principal could be resolved (401)
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Principal exists but lacks rights (403)
    #[error("{message}")]
    PermissionDenied { message: String, redirect: String },

    /// Referenced entity absent (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Missing required field on a write (400)
    #[error("{message}")]
    Validation { message: String, redirect: String },

    /// creatorhub-common error
    #[error("Common error: {0}")]
    Common(#[from] creatorhub_common::Error),
}

impl ApiError {
    pub fn permission_denied(message: impl Into<String>, redirect: impl Into<String>) -> Self {
        ApiError::PermissionDenied {
            message: message.into(),
            redirect: redirect.into(),
        }
    }

    pub fn validation(message: impl Into<String>, redirect: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            redirect: redirect.into(),
        }
    }
}

fn error_body(code: &str, message: String, redirect: Option<String>) -> Json<Value> {
    let mut error = json!({
        "code": code,
        "message": message,
    });
    if let Some(redirect) = redirect {
        error["redirect"] = Value::String(redirect);
    }
    Json(json!({ "error": error }))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::AuthenticationRequired => (
                StatusCode::UNAUTHORIZED,
                error_body(
                    "AUTHENTICATION_REQUIRED",
                    "Authentication required".to_string(),
                    Some(LOGIN_PATH.to_string()),
                ),
            ),
            ApiError::PermissionDenied { message, redirect } => (
                StatusCode::FORBIDDEN,
                error_body("PERMISSION_DENIED", message, Some(redirect)),
            ),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                error_body("NOT_FOUND", msg, None),
            ),
            ApiError::Validation { message, redirect } => (
                StatusCode::BAD_REQUEST,
                error_body("VALIDATION_ERROR", message, Some(redirect)),
            ),
            ApiError::Common(creatorhub_common::Error::NotFound(msg)) => (
                StatusCode::NOT_FOUND,
                error_body("NOT_FOUND", msg, None),
            ),
            ApiError::Common(creatorhub_common::Error::InvalidInput(msg)) => (
                StatusCode::BAD_REQUEST,
                error_body("VALIDATION_ERROR", msg, None),
            ),
            ApiError::Common(ref err) => {
                error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_body("INTERNAL_ERROR", INTERNAL_ERROR_MESSAGE.to_string(), None),
                )
            }
        };

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
