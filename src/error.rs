//! Application error type shared by every layer.
//!
//! Each variant carries a human-readable message and a JSON `details` payload
//! that is returned verbatim to API clients.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload used in API responses.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Coarse classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Repository,
    Encoding,
    Internal,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client input was rejected (bad URL, TTL out of bounds).
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// The key-value store failed. Propagated unchanged, never retried.
    #[error("{message}")]
    Repository { message: String, details: Value },
    /// The alias encoder met a digit it cannot represent.
    #[error("{message}")]
    Encoding { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn repository(message: impl Into<String>, details: Value) -> Self {
        Self::Repository {
            message: message.into(),
            details,
        }
    }
    pub fn encoding(message: impl Into<String>, details: Value) -> Self {
        Self::Encoding {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation { .. } => ErrorKind::Validation,
            AppError::NotFound { .. } => ErrorKind::NotFound,
            AppError::Repository { .. } => ErrorKind::Repository,
            AppError::Encoding { .. } => ErrorKind::Encoding,
            AppError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self.kind() {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "validation_error"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            ErrorKind::Repository => (StatusCode::BAD_GATEWAY, "repository_error"),
            ErrorKind::Encoding => (StatusCode::INTERNAL_SERVER_ERROR, "encoding_error"),
            ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Repository { message, details }
            | AppError::Encoding { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(kind = ?self.kind(), "Request failed: {}", self);
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request("Request validation failed", json!(errors))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::repository(
            "Key-value store error",
            json!({ "reason": e.to_string() }),
        )
    }
}
