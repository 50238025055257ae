//! Client error types
//!
//! Every variant is a transport or decode failure; the catalog layer has no
//! domain errors of its own.

use thiserror::Error;

/// Structured error body some backend routes return on failure
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub code: i32,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a structured error
    #[error("API error {code}: {message}")]
    Api {
        code: i32,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Authentication required
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend rejected the request (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Internal error: {0}")]
    Internal(String),

    /// Body did not match the endpoint's shape
    #[error("Invalid response from {path}: {reason}")]
    InvalidResponse { path: String, reason: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Bad configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub(crate) fn invalid_response(path: &str, reason: impl std::fmt::Display) -> Self {
        ClientError::InvalidResponse {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Map a non-success status and its body text to an error
    pub(crate) fn from_status(status: http::StatusCode, text: String) -> Self {
        if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&text) {
            return ClientError::Api {
                code: api_err.code,
                message: api_err.message,
                details: api_err.details,
            };
        }
        match status {
            http::StatusCode::UNAUTHORIZED => ClientError::Unauthorized(text),
            http::StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            http::StatusCode::NOT_FOUND => ClientError::NotFound(text),
            http::StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Internal(format!("{}: {}", status, text)),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
