//! Shared types for the catalog client
//!
//! Domain entities, request bodies and response envelopes used by the
//! catalog client and anything that talks to the same backend.

pub mod models;
pub mod request;
pub mod response;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    ActiveFlag, Addon, AddonOption, Category, CategoryOption, CategoryRef, Product, ProductImage,
    ProductInput, VariantItem,
};
pub use request::{ListTab, QueryParams};
pub use response::{ProductListing, TotalData};
pub use types::Id;
