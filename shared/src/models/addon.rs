//! Add-on Model

use serde::{Deserialize, Serialize};

use crate::types::Id;

/// Active flag as sent by the backend: `0`/`1` on the add-on list, a boolean
/// on some product payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActiveFlag {
    Code(i64),
    Bool(bool),
}

impl ActiveFlag {
    /// Only the integer code `1` counts as active.
    pub fn is_on(self) -> bool {
        matches!(self, ActiveFlag::Code(1))
    }
}

impl Default for ActiveFlag {
    fn default() -> Self {
        ActiveFlag::Code(0)
    }
}

/// Add-on record (list endpoint and `addon` entries of a product)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addon {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_active: ActiveFlag,
    #[serde(default)]
    pub add_on_item_count: i64,
}

/// Dropdown projection of an [`Addon`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonOption {
    pub label: String,
    pub value: Id,
    pub is_active: bool,
    pub add_on_item_count: i64,
}

impl From<&Addon> for AddonOption {
    fn from(addon: &Addon) -> Self {
        Self {
            label: addon.name.clone(),
            value: Id::Number(addon.id),
            is_active: addon.is_active.is_on(),
            add_on_item_count: addon.add_on_item_count,
        }
    }
}
