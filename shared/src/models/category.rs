//! Category Model

use serde::{Deserialize, Serialize};

use crate::types::Id;

/// Category record as returned by the category endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Category reference embedded in a product (either side may be missing)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub name: Option<String>,
}

impl CategoryRef {
    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
        }
    }
}

/// Dropdown projection of a [`Category`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub label: String,
    pub value: Id,
}

impl From<&Category> for CategoryOption {
    fn from(category: &Category) -> Self {
        Self {
            label: category.name.clone(),
            value: Id::Number(category.id),
        }
    }
}
