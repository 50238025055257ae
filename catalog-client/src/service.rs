//! Catalog service
//!
//! Maps catalog operations onto the two backend API generations. Stateless:
//! every call is one request/response round trip, decoded into the typed
//! shapes from `shared::response` before it leaves this module.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use shared::models::{Addon, Category, Product, ProductInput};
use shared::request::{DeleteRequest, ListRequest, QueryParams, StatusChangeRequest};
use shared::response::{DataEnvelope, MaybeEnveloped, ProductListEnvelope, ProductListing};
use shared::types::Id;

use crate::transport::{FormField, RequestBody, Transport};
use crate::{ClientError, ClientResult};

/// Backend paths
pub mod paths {
    pub const LIST: &str = "/list";
    pub const CATEGORY: &str = "/category";
    pub const ADDON_LIST: &str = "/addonlist";
    pub const DETAIL: &str = "/detail";
    pub const ADD: &str = "/add";
    pub const EDIT: &str = "/edit";
    pub const CHANGE_STATUS: &str = "/changeitemstatus";
    pub const DELETE: &str = "/delete";
}

/// Multipart field carrying the product JSON on create/edit
pub const PRODUCT_FIELD: &str = "data_barang";
/// Multipart field carrying the product id on detail
pub const PRODUCT_ID_FIELD: &str = "id_barang";

/// JSON blob posted under [`PRODUCT_FIELD`] by create and edit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nama_barang: String,
    /// Category name on create, category id on edit
    pub kategori: Option<Value>,
    pub sku: String,
    pub unit: String,
    pub harga: String,
    pub barcode: Option<String>,
    pub deskripsi: String,
    pub has_variant: bool,
    pub has_addon: bool,
    pub as_addon: bool,
    pub add_on: Vec<Addon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_change: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_clear: Option<bool>,
}

impl ProductPayload {
    fn base(input: &ProductInput) -> Self {
        Self {
            id: None,
            nama_barang: input.name.clone(),
            kategori: None,
            sku: input.sku.clone(),
            unit: input.unit.clone(),
            harga: input.price.clone(),
            barcode: input.barcode.clone().filter(|b| !b.is_empty()),
            deskripsi: input.description.clone(),
            has_variant: input.has_variant.unwrap_or(false),
            has_addon: !input.addon.is_empty(),
            as_addon: input.as_addon.unwrap_or(false),
            add_on: input.addon.clone(),
            variant_change: None,
            variant_clear: None,
        }
    }

    /// Create refers to the category by name
    pub fn for_create(input: &ProductInput) -> Self {
        Self {
            kategori: input.category.name.clone().map(Value::String),
            ..Self::base(input)
        }
    }

    /// Edit refers to the category by id and never requests variant changes
    pub fn for_update(input: &ProductInput) -> Self {
        Self {
            id: input.id,
            kategori: input.category.id.as_ref().map(id_value),
            variant_change: Some(false),
            variant_clear: Some(false),
            ..Self::base(input)
        }
    }

    fn into_form(self) -> ClientResult<RequestBody> {
        let blob = serde_json::to_string(&self)?;
        Ok(RequestBody::Multipart(vec![FormField::new(PRODUCT_FIELD, blob)]))
    }
}

fn id_value(id: &Id) -> Value {
    match id {
        Id::Number(n) => Value::from(*n),
        Id::Text(s) => Value::from(s.clone()),
    }
}

fn decode<T: DeserializeOwned>(path: &str, body: Value) -> ClientResult<T> {
    serde_json::from_value(body).map_err(|e| ClientError::invalid_response(path, e))
}

/// Catalog service over the v1 and v2 transports
#[derive(Clone)]
pub struct CatalogService {
    v1: Arc<dyn Transport>,
    v2: Arc<dyn Transport>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService").finish_non_exhaustive()
    }
}

impl CatalogService {
    pub fn new(v1: Arc<dyn Transport>, v2: Arc<dyn Transport>) -> Self {
        Self { v1, v2 }
    }

    /// One page of products with the tab counts
    pub async fn list(&self, params: &QueryParams) -> ClientResult<ProductListing> {
        let body = RequestBody::json(&ListRequest::from(params))?;
        let raw = self.v2.submit(paths::LIST, body).await?;
        let envelope: ProductListEnvelope = decode(paths::LIST, raw)?;
        Ok(envelope.into())
    }

    /// Raw category records (v1)
    pub async fn get_categories(&self) -> ClientResult<Vec<Category>> {
        let raw = self.v1.submit(paths::CATEGORY, RequestBody::Empty).await?;
        let envelope: DataEnvelope<Vec<Category>> = decode(paths::CATEGORY, raw)?;
        Ok(envelope.data)
    }

    /// Raw add-on records
    pub async fn get_addons(&self) -> ClientResult<Vec<Addon>> {
        let raw = self.v2.submit(paths::ADDON_LIST, RequestBody::Empty).await?;
        let envelope: DataEnvelope<Vec<Addon>> = decode(paths::ADDON_LIST, raw)?;
        Ok(envelope.data)
    }

    /// Full product detail
    ///
    /// Sent as multipart even though there is no file: the detail route only
    /// reads form fields.
    pub async fn get_by_id(&self, id: i64) -> ClientResult<Product> {
        let body = RequestBody::Multipart(vec![FormField::new(PRODUCT_ID_FIELD, id.to_string())]);
        let raw = self.v2.submit(paths::DETAIL, body).await?;
        let envelope: DataEnvelope<Product> = decode(paths::DETAIL, raw)?;
        Ok(envelope.data)
    }

    // TODO: attach `input.image` as the `gambar` file part once the add/edit
    // routes accept uploads.
    /// Create a product and return the stored record
    ///
    /// The echo must decode as a product (bare or under `data`). A body
    /// without one, such as a bare status message, is reported as
    /// [`ClientError::InvalidResponse`] even though the backend may already
    /// have stored the row.
    pub async fn create(&self, input: &ProductInput) -> ClientResult<Product> {
        let body = ProductPayload::for_create(input).into_form()?;
        let raw = self.v2.submit(paths::ADD, body).await?;
        let echo: MaybeEnveloped<Product> = decode(paths::ADD, raw)?;
        Ok(echo.into_inner())
    }

    /// Edit a product; echo decoding as in [`CatalogService::create`]
    pub async fn update(&self, input: &ProductInput) -> ClientResult<Product> {
        let body = ProductPayload::for_update(input).into_form()?;
        let raw = self.v2.submit(paths::EDIT, body).await?;
        let echo: MaybeEnveloped<Product> = decode(paths::EDIT, raw)?;
        Ok(echo.into_inner())
    }

    /// Switch one product on or off; a missing flag counts as off
    ///
    /// A response that carries no product is an
    /// [`ClientError::InvalidResponse`], not a success.
    pub async fn update_status(&self, product: &Product) -> ClientResult<Product> {
        let request = StatusChangeRequest::new(product.id, product.is_active.unwrap_or(false));
        self.change_status(request).await
    }

    /// Same endpoint, addressed by a raw row key from a bulk selection
    pub async fn update_status_bulk(&self, id: impl Into<Id>, is_active: bool) -> ClientResult<Product> {
        self.change_status(StatusChangeRequest::new(id, is_active)).await
    }

    async fn change_status(&self, request: StatusChangeRequest) -> ClientResult<Product> {
        let body = RequestBody::json(&request)?;
        let raw = self.v2.submit(paths::CHANGE_STATUS, body).await?;
        let echo: MaybeEnveloped<Product> = decode(paths::CHANGE_STATUS, raw)?;
        Ok(echo.into_inner())
    }

    /// Hard delete; the response body is ignored
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let body = RequestBody::json(&DeleteRequest { item: id })?;
        self.v2.submit(paths::DELETE, body).await?;
        tracing::info!(id, "Product deleted");
        Ok(())
    }
}
