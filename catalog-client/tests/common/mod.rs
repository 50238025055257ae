// catalog-client/tests/common/mod.rs
// In-memory transport that records requests and replays canned bodies

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use catalog_client::{CatalogClient, ClientError, ClientResult, RequestBody, Transport};
use serde_json::Value;

#[derive(Default)]
pub struct MockTransport {
    calls: Mutex<Vec<(String, RequestBody)>>,
    responses: Mutex<HashMap<String, Value>>,
    failing: Mutex<HashSet<String>>,
    delay: Option<Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every response for `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn on(&self, path: &str, body: Value) {
        self.responses.lock().unwrap().insert(path.to_string(), body);
    }

    pub fn fail(&self, path: &str) {
        self.failing.lock().unwrap().insert(path.to_string());
    }

    pub fn recover(&self, path: &str) {
        self.failing.lock().unwrap().remove(path);
    }

    pub fn calls(&self) -> Vec<(String, RequestBody)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|(p, _)| p == path).count()
    }

    /// Body of the last request sent to `path`
    pub fn last_body(&self, path: &str) -> Option<RequestBody> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, body)| body.clone())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn submit(&self, path: &str, body: RequestBody) -> ClientResult<Value> {
        self.calls.lock().unwrap().push((path.to_string(), body));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.lock().unwrap().contains(path) {
            return Err(ClientError::Internal(format!("503 Service Unavailable: {}", path)));
        }
        self.responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(path.to_string()))
    }
}

pub fn client(v1: &Arc<MockTransport>, v2: &Arc<MockTransport>) -> CatalogClient {
    CatalogClient::with_transports(v1.clone(), v2.clone())
}

/// JSON blob inside the single `data_barang` multipart field
pub fn product_blob(body: &RequestBody) -> Value {
    match body {
        RequestBody::Multipart(fields) => {
            assert_eq!(fields.len(), 1, "expected a single form field");
            assert_eq!(fields[0].name, "data_barang");
            serde_json::from_str(&fields[0].value).unwrap()
        }
        other => panic!("expected multipart body, got {other:?}"),
    }
}
