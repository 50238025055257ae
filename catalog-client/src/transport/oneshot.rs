//! In-process transport (feature `in-process`)
//!
//! Calls an axum `Router` directly through `tower::ServiceExt::oneshot`.
//! Useful for embedding the backend in the same process and for driving the
//! client against a fake backend in tests.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, header};
use serde_json::Value;
use tower::ServiceExt;

use super::{FormField, RequestBody, Transport, decode_body};
use crate::{ClientError, ClientResult};

/// Oneshot transport (in-memory calls)
///
/// # Example
///
/// ```ignore
/// let router: Router = backend_routes().with_state(state);
/// let v2 = OneshotTransport::new(router).with_prefix("/api/v2");
/// let body = v2.submit("/addonlist", RequestBody::Empty).await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotTransport {
    router: Router,
    prefix: String,
    token: Option<String>,
}

impl OneshotTransport {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            prefix: String::new(),
            token: None,
        }
    }

    /// Path prefix prepended to every request (the API generation's mount point)
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn build_request(&self, path: &str, body: RequestBody) -> ClientResult<Request<Body>> {
        let uri = format!("{}/{}", self.prefix, path.trim_start_matches('/'));
        let mut builder = Request::builder().method(http::Method::POST).uri(uri);

        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            RequestBody::Empty => builder.body(Body::empty()),
            RequestBody::Json(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&value)?)),
            RequestBody::Multipart(fields) => {
                let boundary = format!("catalog-{}", uuid::Uuid::new_v4().simple());
                builder
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={}", boundary),
                    )
                    .body(Body::from(encode_multipart(&fields, &boundary)))
            }
        };
        request.map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }
}

/// Encode text fields as a `multipart/form-data` body
pub(crate) fn encode_multipart(fields: &[FormField], boundary: &str) -> Vec<u8> {
    let mut out = String::new();
    for field in fields {
        out.push_str(&format!("--{}\r\n", boundary));
        out.push_str(&format!(
            "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
            field.name
        ));
        out.push_str(&field.value);
        out.push_str("\r\n");
    }
    out.push_str(&format!("--{}--\r\n", boundary));
    out.into_bytes()
}

#[async_trait]
impl Transport for OneshotTransport {
    async fn submit(&self, path: &str, body: RequestBody) -> ClientResult<Value> {
        tracing::debug!(path = %path, encoding = body.encoding(), "Oneshot POST");
        let request = self.build_request(path, body)?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).to_string();
            tracing::warn!(path = %path, status = %status, "Oneshot request failed");
            return Err(ClientError::from_status(status, text));
        }
        decode_body(path, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_multipart() {
        let body = encode_multipart(&[FormField::new("id_barang", "42")], "XYZ");
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "--XYZ\r\nContent-Disposition: form-data; name=\"id_barang\"\r\n\r\n42\r\n--XYZ--\r\n"
        );
    }

    #[test]
    fn test_request_uri_and_headers() {
        let t = OneshotTransport::new(Router::new())
            .with_prefix("/api/v2/")
            .with_token(Some("tok".into()));
        let req = t
            .build_request("/detail", RequestBody::Multipart(vec![FormField::new("id_barang", "1")]))
            .unwrap();

        assert_eq!(req.uri().path(), "/api/v2/detail");
        assert_eq!(req.headers()[header::AUTHORIZATION], "Bearer tok");
        let content_type = req.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary=catalog-"));
    }
}
