//! Transport capability
//!
//! A transport performs one POST against its API generation and hands back
//! the decoded JSON body. Two instances exist at runtime, one per backend
//! version; the service picks one per operation.

use async_trait::async_trait;
use serde_json::Value;

use crate::ClientResult;

pub mod http;
#[cfg(feature = "in-process")]
pub mod oneshot;

pub use self::http::NetworkTransport;
#[cfg(feature = "in-process")]
pub use self::oneshot::OneshotTransport;

/// Text field of a multipart form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Request body and its content encoding
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body
    Empty,
    /// `application/json`
    Json(Value),
    /// `multipart/form-data` with text fields only
    Multipart(Vec<FormField>),
}

impl RequestBody {
    /// Serialize `body` as a JSON request
    pub fn json<B: serde::Serialize>(body: &B) -> ClientResult<Self> {
        Ok(RequestBody::Json(serde_json::to_value(body)?))
    }

    pub fn encoding(&self) -> &'static str {
        match self {
            RequestBody::Empty => "empty",
            RequestBody::Json(_) => "json",
            RequestBody::Multipart(_) => "multipart",
        }
    }
}

/// Perform a POST and return the decoded body, or fail
#[async_trait]
pub trait Transport: Send + Sync {
    async fn submit(&self, path: &str, body: RequestBody) -> ClientResult<Value>;
}

/// Decode a success body; an empty body reads as `null`
pub(crate) fn decode_body(path: &str, bytes: &[u8]) -> ClientResult<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes).map_err(|e| crate::ClientError::invalid_response(path, e))
}
