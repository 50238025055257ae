//! Product Model

use serde::{Deserialize, Serialize};

use super::addon::Addon;
use super::category::CategoryRef;
use crate::util::{lenient_bool, null_as_default, string_or_number};

/// Product image: a stored URL, or raw bytes picked in an edit session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductImage {
    Url(String),
    #[serde(skip_deserializing)]
    Binary(Vec<u8>),
}

impl Default for ProductImage {
    fn default() -> Self {
        ProductImage::Url(String::new())
    }
}

/// Product entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: ProductImage,
    /// Attached add-ons (always present, possibly empty)
    #[serde(default, deserialize_with = "null_as_default")]
    pub addon: Vec<Addon>,
    /// Secondary add-on list some responses carry instead of `addon`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_on_link: Option<Vec<Addon>>,
    /// Decimal kept as text
    #[serde(default, deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: CategoryRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Vec<VariantItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_item: Option<Vec<VariantItem>>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Product>>,

    // -- Edit-session flags (never part of the wire record) --
    #[serde(skip)]
    pub has_variant: Option<bool>,
    #[serde(skip)]
    pub has_addon: Option<bool>,
    #[serde(skip)]
    pub as_addon: Option<bool>,
    #[serde(skip)]
    pub variant_change: Option<bool>,
    #[serde(skip)]
    pub variant_clear: Option<bool>,
}

/// Concrete purchasable variant of a product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantItem {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(default)]
    pub product_item_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Create / edit payload
///
/// `id` is only meaningful for edits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductInput {
    pub id: Option<i64>,
    pub name: String,
    pub sku: String,
    pub unit: String,
    pub description: String,
    pub image: Option<ProductImage>,
    pub addon: Vec<Addon>,
    pub price: String,
    pub barcode: Option<String>,
    pub category: CategoryRef,
    pub has_variant: Option<bool>,
    pub as_addon: Option<bool>,
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            sku: product.sku.clone(),
            unit: product.unit.clone(),
            description: product.description.clone(),
            image: Some(product.image.clone()),
            addon: product.addon.clone(),
            price: product.price.clone(),
            barcode: product.barcode.clone(),
            category: product.category.clone(),
            has_variant: product.has_variant,
            as_addon: product.as_addon,
        }
    }
}
