//! Response envelopes
//!
//! Typed shapes of every catalog endpoint's body. Decoding happens once, at
//! the client boundary; nothing past it handles an untyped payload.

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Standard envelope: payload under `data`
///
/// ```json
/// { "data": [ ... ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Body that is either wrapped in `data` or the bare record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaybeEnveloped<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> MaybeEnveloped<T> {
    pub fn into_inner(self) -> T {
        match self {
            MaybeEnveloped::Wrapped { data } => data,
            MaybeEnveloped::Bare(t) => t,
        }
    }
}

/// Aggregate counts accompanying a product list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalData {
    pub count_all: u64,
    pub count_active: u64,
    pub count_non_active: u64,
}

/// List body: rows doubly nested under `data.data`, counts beside the outer
/// `data`
///
/// ```json
/// {
///     "data": { "data": [ ... ] },
///     "count_all": 10,
///     "count_active": 7,
///     "count_non_active": 3
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListEnvelope {
    pub data: DataEnvelope<Vec<Product>>,
    #[serde(flatten)]
    pub totals: TotalData,
}

/// One page of products plus the counts for the tab badges
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListing {
    pub items: Vec<Product>,
    pub totals: TotalData,
}

impl From<ProductListEnvelope> for ProductListing {
    fn from(envelope: ProductListEnvelope) -> Self {
        Self {
            items: envelope.data.data,
            totals: envelope.totals,
        }
    }
}
