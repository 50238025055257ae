//! Catalog Client - product catalog access for the back-office UI
//!
//! Talks to the two generations of the catalog API, normalizes their
//! payloads into the `shared` domain types, and keeps the reference lists
//! and row selection the views work with.

pub mod client;
pub mod config;
pub mod error;
pub mod service;
pub mod store;
pub mod transport;

pub use client::CatalogClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use service::CatalogService;
pub use store::{ReferenceStore, SelectionStore};
pub use transport::{FormField, NetworkTransport, RequestBody, Transport};
#[cfg(feature = "in-process")]
pub use transport::OneshotTransport;

// Re-export shared types for convenience
pub use shared::{
    ActiveFlag, Addon, AddonOption, Category, CategoryOption, CategoryRef, Id, Product, ProductInput,
    ProductListing, QueryParams, TotalData,
};
