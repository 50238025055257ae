//! Client-side stores
//!
//! Owned by the [`CatalogClient`](crate::CatalogClient) and shared by
//! reference; nothing else mutates them.

pub mod reference;
pub mod selection;

pub use reference::{ReferenceCache, ReferenceStore};
pub use selection::SelectionStore;
