// catalog-client/tests/stores.rs
// Reference data and selection stores

mod common;

use std::sync::Arc;
use std::time::Duration;

use catalog_client::{ActiveFlag, Addon, AddonOption, Category, CategoryOption, Id};
use common::{MockTransport, client};
use serde_json::json;

fn categories_body() -> serde_json::Value {
    json!({"data": [{"id": 2, "name": "Minuman"}, {"id": 1, "name": "Makanan"}]})
}

fn addons_body() -> serde_json::Value {
    json!({"data": [
        {"id": 10, "name": "Keju", "is_active": 1, "add_on_item_count": 3},
        {"id": 11, "name": "Telur", "is_active": 0, "add_on_item_count": 0}
    ]})
}

#[tokio::test]
async fn test_set_categories_projects_in_order() {
    let (v1, v2) = (Arc::new(MockTransport::new()), Arc::new(MockTransport::new()));
    let store = client(&v1, &v2).reference();

    store.set_categories(&[
        Category { id: 2, name: "Minuman".into() },
        Category { id: 1, name: "Makanan".into() },
    ]);

    assert_eq!(
        store.categories(),
        vec![
            CategoryOption { label: "Minuman".into(), value: Id::Number(2) },
            CategoryOption { label: "Makanan".into(), value: Id::Number(1) },
        ]
    );
}

#[tokio::test]
async fn test_set_addons_normalizes_active_flag() {
    let (v1, v2) = (Arc::new(MockTransport::new()), Arc::new(MockTransport::new()));
    let store = client(&v1, &v2).reference();

    store.set_addons(&[
        Addon { id: 10, name: "Keju".into(), is_active: ActiveFlag::Code(1), add_on_item_count: 3 },
        Addon { id: 11, name: "Telur".into(), is_active: ActiveFlag::Code(0), add_on_item_count: 0 },
        Addon { id: 12, name: "Sosis".into(), is_active: ActiveFlag::Code(5), add_on_item_count: 7 },
    ]);

    let addons = store.addons();
    assert_eq!(
        addons[0],
        AddonOption { label: "Keju".into(), value: Id::Number(10), is_active: true, add_on_item_count: 3 }
    );
    assert!(!addons[1].is_active);
    assert!(!addons[2].is_active);
    assert_eq!(addons[2].add_on_item_count, 7);
}

#[tokio::test]
async fn test_fetch_categories_hits_network_once() {
    let (v1, v2) = (Arc::new(MockTransport::new()), Arc::new(MockTransport::new()));
    v1.on("/category", categories_body());
    let store = client(&v1, &v2).reference();

    let first = store.fetch_categories().await.unwrap();
    let second = store.fetch_categories().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].label, "Minuman");
    assert_eq!(v1.calls_to("/category"), 1);
}

#[tokio::test]
async fn test_fetch_addons_projects_records() {
    let (v1, v2) = (Arc::new(MockTransport::new()), Arc::new(MockTransport::new()));
    v2.on("/addonlist", addons_body());
    let store = client(&v1, &v2).reference();

    let addons = store.fetch_addons().await.unwrap();

    assert_eq!(addons.len(), 2);
    assert!(addons[0].is_active);
    assert!(!addons[1].is_active);
    assert_eq!(store.addons(), addons);
}

#[tokio::test]
async fn test_failed_addon_fetch_leaves_cache_untouched() {
    let (v1, v2) = (Arc::new(MockTransport::new()), Arc::new(MockTransport::new()));
    v2.fail("/addonlist");
    let store = client(&v1, &v2).reference();

    assert!(store.fetch_addons().await.is_err());
    assert!(store.addons().is_empty());

    // Next call retries and fills the cache
    v2.recover("/addonlist");
    v2.on("/addonlist", addons_body());
    assert_eq!(store.fetch_addons().await.unwrap().len(), 2);
    assert_eq!(v2.calls_to("/addonlist"), 2);
}

#[tokio::test]
async fn test_failed_fetch_after_invalidate_keeps_cache_empty() {
    let (v1, v2) = (Arc::new(MockTransport::new()), Arc::new(MockTransport::new()));
    let store = client(&v1, &v2).reference();
    store.set_addons(&[Addon { id: 1, name: "Keju".into(), is_active: ActiveFlag::Code(1), add_on_item_count: 1 }]);

    store.invalidate_addons();
    v2.fail("/addonlist");

    assert!(store.fetch_addons().await.is_err());
    assert!(store.addons().is_empty());
}

#[tokio::test]
async fn test_populated_cache_ignores_backend_outage() {
    let (v1, v2) = (Arc::new(MockTransport::new()), Arc::new(MockTransport::new()));
    v2.on("/addonlist", addons_body());
    let store = client(&v1, &v2).reference();
    let before = store.fetch_addons().await.unwrap();

    v2.fail("/addonlist");
    assert_eq!(store.fetch_addons().await.unwrap(), before);
    assert_eq!(v2.calls_to("/addonlist"), 1);
}

#[tokio::test]
async fn test_concurrent_fetches_share_one_request() {
    let v1 = Arc::new(MockTransport::new().with_delay(Duration::from_millis(50)));
    let v2 = Arc::new(MockTransport::new());
    v1.on("/category", categories_body());
    let store = client(&v1, &v2).reference();

    let (a, b) = tokio::join!(store.fetch_categories(), store.fetch_categories());

    assert_eq!(a.unwrap(), b.unwrap());
    assert_eq!(v1.calls_to("/category"), 1);
}

#[tokio::test]
async fn test_invalidation_is_per_list() {
    let (v1, v2) = (Arc::new(MockTransport::new()), Arc::new(MockTransport::new()));
    v1.on("/category", categories_body());
    v2.on("/addonlist", addons_body());
    let store = client(&v1, &v2).reference();
    store.fetch_categories().await.unwrap();
    store.fetch_addons().await.unwrap();

    store.invalidate_categories();
    assert!(store.categories().is_empty());
    assert_eq!(store.addons().len(), 2);

    store.fetch_categories().await.unwrap();
    assert_eq!(v1.calls_to("/category"), 2);

    store.invalidate();
    assert!(store.categories().is_empty());
    assert!(store.addons().is_empty());
}

#[tokio::test]
async fn test_selection_count() {
    let (v1, v2) = (Arc::new(MockTransport::new()), Arc::new(MockTransport::new()));
    let selection = client(&v1, &v2).selection();

    selection.set_checked(vec![Id::Number(3), Id::Number(1), Id::Number(2)]);
    assert_eq!(selection.count(), 3);

    selection.clear_checked();
    assert_eq!(selection.count(), 0);
    assert!(v1.calls().is_empty() && v2.calls().is_empty());
}
