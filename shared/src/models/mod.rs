//! Data models
//!
//! Canonical catalog entities and the dropdown projections built from the
//! reference lists.

pub mod addon;
pub mod category;
pub mod product;

// Re-exports
pub use addon::*;
pub use category::*;
pub use product::*;
