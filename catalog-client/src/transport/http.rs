//! Network transport over reqwest

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::Form;
use serde_json::Value;

use super::{RequestBody, Transport, decode_body};
use crate::{ClientError, ClientResult};

/// Network transport bound to one API base URL
#[derive(Debug, Clone)]
pub struct NetworkTransport {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkTransport {
    pub fn new(base_url: &str, timeout_secs: u64) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach a bearer token to every request
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn handle_response(&self, path: &str, response: reqwest::Response) -> ClientResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(ClientError::from_status(status, text));
        }
        let bytes = response.bytes().await?;
        decode_body(path, &bytes)
    }
}

#[async_trait]
impl Transport for NetworkTransport {
    async fn submit(&self, path: &str, body: RequestBody) -> ClientResult<Value> {
        let url = self.url(path);
        tracing::debug!(url = %url, encoding = body.encoding(), "POST");

        let mut req = self.client.post(&url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        req = match body {
            RequestBody::Empty => req,
            RequestBody::Json(value) => req.json(&value),
            RequestBody::Multipart(fields) => {
                let form = fields
                    .into_iter()
                    .fold(Form::new(), |form, field| form.text(field.name, field.value));
                req.multipart(form)
            }
        };

        let result = match req.send().await {
            Ok(response) => self.handle_response(path, response).await,
            Err(e) => Err(e.into()),
        };
        if let Err(e) = &result {
            tracing::warn!(url = %url, error = %e, "Request failed");
        }
        result
    }
}
