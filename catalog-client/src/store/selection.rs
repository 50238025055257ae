//! Selection store
//!
//! Row keys currently checked in the product table, for bulk actions.

use parking_lot::RwLock;
use shared::types::Id;

/// Checked row keys
///
/// Callers pass duplicate-free keys (the table's checked-row set); the store
/// does not deduplicate.
#[derive(Debug, Default)]
pub struct SelectionStore {
    checked: RwLock<Vec<Id>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole selection
    pub fn set_checked(&self, ids: Vec<Id>) {
        tracing::debug!(count = ids.len(), "Selection replaced");
        *self.checked.write() = ids;
    }

    pub fn clear_checked(&self) {
        self.checked.write().clear();
        tracing::debug!("Selection cleared");
    }

    /// Number of checked rows
    pub fn count(&self) -> usize {
        self.checked.read().len()
    }

    /// Current selection, in the order it was set
    pub fn all(&self) -> Vec<Id> {
        self.checked.read().clone()
    }
}
