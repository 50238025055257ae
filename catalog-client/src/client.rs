//! Composition root
//!
//! Builds the transports, the service and the stores once and hands out
//! shared references. Views hold a `CatalogClient` (or clones of its parts)
//! instead of reaching for globals.

use std::sync::Arc;

use crate::service::CatalogService;
use crate::store::{ReferenceStore, SelectionStore};
use crate::transport::{NetworkTransport, Transport};
use crate::{ClientConfig, ClientResult};

/// Catalog client: service plus the stores that sit on top of it
#[derive(Debug, Clone)]
pub struct CatalogClient {
    service: CatalogService,
    reference: Arc<ReferenceStore>,
    selection: Arc<SelectionStore>,
}

impl CatalogClient {
    /// Network client for the configured v1/v2 base URLs
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let v1 = NetworkTransport::new(&config.api_url, config.timeout)?
            .with_token(config.token.clone());
        let v2 = NetworkTransport::new(&config.api_v2_url, config.timeout)?
            .with_token(config.token.clone());

        tracing::info!(
            api_url = %v1.base_url(),
            api_v2_url = %v2.base_url(),
            "Catalog client configured"
        );
        Ok(Self::with_transports(Arc::new(v1), Arc::new(v2)))
    }

    /// Same object graph over arbitrary transports
    pub fn with_transports(v1: Arc<dyn Transport>, v2: Arc<dyn Transport>) -> Self {
        let service = CatalogService::new(v1, v2);
        Self {
            reference: Arc::new(ReferenceStore::new(service.clone())),
            selection: Arc::new(SelectionStore::new()),
            service,
        }
    }

    pub fn service(&self) -> &CatalogService {
        &self.service
    }

    pub fn reference(&self) -> Arc<ReferenceStore> {
        self.reference.clone()
    }

    pub fn selection(&self) -> Arc<SelectionStore> {
        self.selection.clone()
    }
}
