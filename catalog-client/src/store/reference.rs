//! Reference data store
//!
//! Categories and add-ons for the dropdowns, fetched once and then served
//! from memory until something overwrites or invalidates them.

use std::future::Future;

use parking_lot::RwLock;
use shared::models::{Addon, AddonOption, Category, CategoryOption};
use tokio::sync::Mutex;

use crate::ClientResult;
use crate::service::CatalogService;

/// Fetch-once cache for one reference list
///
/// An empty list means "not loaded". Fetches are serialized: a caller that
/// arrives while another fetch is in flight waits for it and is then served
/// from what it stored. A failed fetch writes nothing.
#[derive(Debug)]
pub struct ReferenceCache<T> {
    items: RwLock<Vec<T>>,
    fetch_lock: Mutex<()>,
}

impl<T: Clone> ReferenceCache<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            fetch_lock: Mutex::new(()),
        }
    }

    /// Current contents (empty when never loaded)
    pub fn get(&self) -> Vec<T> {
        self.items.read().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Overwrite the contents
    pub fn set(&self, items: Vec<T>) {
        *self.items.write() = items;
    }

    pub fn invalidate(&self) {
        self.set(Vec::new());
    }

    /// Return the cached list, or run `fetch` once and store its result
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> ClientResult<Vec<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<Vec<T>>>,
    {
        let cached = self.get();
        if !cached.is_empty() {
            return Ok(cached);
        }

        let _guard = self.fetch_lock.lock().await;
        // Filled by the fetch we waited on
        let cached = self.get();
        if !cached.is_empty() {
            return Ok(cached);
        }

        let items = fetch().await?;
        self.set(items.clone());
        Ok(items)
    }
}

impl<T: Clone> Default for ReferenceCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cached category and add-on options
#[derive(Debug)]
pub struct ReferenceStore {
    service: CatalogService,
    categories: ReferenceCache<CategoryOption>,
    addons: ReferenceCache<AddonOption>,
}

impl ReferenceStore {
    pub fn new(service: CatalogService) -> Self {
        Self {
            service,
            categories: ReferenceCache::new(),
            addons: ReferenceCache::new(),
        }
    }

    /// Category options, fetched on first use
    pub async fn fetch_categories(&self) -> ClientResult<Vec<CategoryOption>> {
        if !self.categories.is_empty() {
            tracing::debug!("Categories served from cache");
        }
        self.categories
            .get_or_fetch(|| async {
                let raw = self.service.get_categories().await?;
                tracing::info!(count = raw.len(), "Categories loaded");
                Ok(raw.iter().map(CategoryOption::from).collect())
            })
            .await
    }

    /// Add-on options, fetched on first use
    pub async fn fetch_addons(&self) -> ClientResult<Vec<AddonOption>> {
        if !self.addons.is_empty() {
            tracing::debug!("Add-ons served from cache");
        }
        self.addons
            .get_or_fetch(|| async {
                let raw = self.service.get_addons().await?;
                tracing::info!(count = raw.len(), "Add-ons loaded");
                Ok(raw.iter().map(AddonOption::from).collect())
            })
            .await
    }

    /// Project and store categories that are already at hand
    pub fn set_categories(&self, raw: &[Category]) {
        self.categories.set(raw.iter().map(CategoryOption::from).collect());
    }

    /// Project and store add-ons that are already at hand
    pub fn set_addons(&self, raw: &[Addon]) {
        self.addons.set(raw.iter().map(AddonOption::from).collect());
    }

    pub fn categories(&self) -> Vec<CategoryOption> {
        self.categories.get()
    }

    pub fn addons(&self) -> Vec<AddonOption> {
        self.addons.get()
    }

    pub fn invalidate_categories(&self) {
        self.categories.invalidate();
    }

    pub fn invalidate_addons(&self) {
        self.addons.invalidate();
    }

    /// Drop both lists; the next fetch goes to the backend
    pub fn invalidate(&self) {
        self.invalidate_categories();
        self.invalidate_addons();
    }
}
