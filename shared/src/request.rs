//! Request types
//!
//! Listing query and the wire bodies the catalog endpoints accept.

use serde::{Deserialize, Serialize};

use crate::types::Id;

/// Tab selector of the product list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListTab {
    /// `"aktif"`
    Active,
    /// `"non_aktif"`
    Inactive,
    /// Anything else: no filter
    #[default]
    All,
}

impl ListTab {
    pub fn parse(tab: &str) -> Self {
        match tab {
            "aktif" => ListTab::Active,
            "non_aktif" => ListTab::Inactive,
            _ => ListTab::All,
        }
    }

    /// Ternary `active` filter sent to the list endpoint
    pub fn active_filter(self) -> Option<&'static str> {
        match self {
            ListTab::Active => Some("1"),
            ListTab::Inactive => Some("0"),
            ListTab::All => None,
        }
    }
}

/// Listing query as held by the list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    pub page: u32,
    pub per_page: u32,
    pub keyword: String,
    pub tab: String,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            keyword: String::new(),
            tab: String::new(),
        }
    }
}

impl QueryParams {
    pub fn tab(&self) -> ListTab {
        ListTab::parse(&self.tab)
    }
}

/// Body of the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListRequest {
    pub page: u32,
    pub search: String,
    /// Sent as text, the way the page-size selector emits it
    pub page_count: String,
    /// `"1"`, `"0"` or `null`
    pub active: Option<&'static str>,
}

impl From<&QueryParams> for ListRequest {
    fn from(params: &QueryParams) -> Self {
        Self {
            page: params.page,
            search: params.keyword.clone(),
            page_count: params.per_page.to_string(),
            active: params.tab().active_filter(),
        }
    }
}

/// Status switch value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl From<bool> for ItemStatus {
    fn from(is_active: bool) -> Self {
        if is_active { ItemStatus::On } else { ItemStatus::Off }
    }
}

/// Body of the status-change endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusChangeRequest {
    pub status: ItemStatus,
    pub id_barang: Id,
}

impl StatusChangeRequest {
    pub fn new(id: impl Into<Id>, is_active: bool) -> Self {
        Self {
            status: is_active.into(),
            id_barang: id.into(),
        }
    }
}

/// Body of the delete endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteRequest {
    pub item: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(tab: &str) -> QueryParams {
        QueryParams {
            page: 2,
            per_page: 25,
            keyword: "kopi".into(),
            tab: tab.into(),
        }
    }

    #[test]
    fn test_tab_mapping() {
        assert_eq!(ListRequest::from(&params("aktif")).active, Some("1"));
        assert_eq!(ListRequest::from(&params("non_aktif")).active, Some("0"));
        assert_eq!(ListRequest::from(&params("semua")).active, None);
        assert_eq!(ListRequest::from(&params("")).active, None);
    }

    #[test]
    fn test_list_request_wire_shape() {
        let body = serde_json::to_value(ListRequest::from(&params("anything_else"))).unwrap();
        assert_eq!(
            body,
            json!({"page": 2, "search": "kopi", "page_count": "25", "active": null})
        );
    }

    #[test]
    fn test_status_change_wire_shape() {
        let off = serde_json::to_value(StatusChangeRequest::new(7i64, false)).unwrap();
        let on = serde_json::to_value(StatusChangeRequest::new("7", true)).unwrap();

        assert_eq!(off, json!({"status": "OFF", "id_barang": 7}));
        assert_eq!(on, json!({"status": "ON", "id_barang": "7"}));
    }
}
