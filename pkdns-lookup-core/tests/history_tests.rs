#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the key history persisted through `JsonFileStore`.

use std::sync::Arc;

use pkdns_lookup_core::adapters::{JsonFileStore, STORAGE_FILE_NAME};
use pkdns_lookup_core::services::HistoryService;
use pkdns_lookup_core::traits::KeyValueStore;
use pkdns_lookup_core::types::{HISTORY_STORAGE_KEY, RECENT_KEYS_MAX_LENGTH};

fn create_store() -> (Arc<JsonFileStore>, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let store = JsonFileStore::new(tmp.path().join("pkdns-lookup").join(STORAGE_FILE_NAME));
    (Arc::new(store), tmp)
}

fn keys(service: &HistoryService) -> Vec<String> {
    service
        .list()
        .entries()
        .iter()
        .map(|e| e.key.clone())
        .collect()
}

#[test]
fn history_order_survives_reopen() {
    let (store, tmp) = create_store();
    let service = HistoryService::new(store.clone());
    service.record_visit("first");
    service.record_visit("second");
    service.set_tag("first", "home");
    service.record_visit("third");

    let reopened = JsonFileStore::new(store.path());
    let service = HistoryService::new(Arc::new(reopened));
    assert_eq!(keys(&service), ["third", "second", "first"]);
    assert_eq!(service.get_tag("first").as_deref(), Some("home"));
    drop(tmp);
}

#[test]
fn history_cap_holds_on_disk() {
    let (store, _tmp) = create_store();
    let service = HistoryService::new(store.clone());
    for i in 0..25 {
        service.record_visit(&format!("key-{i:02}"));
    }

    let raw = store.get(HISTORY_STORAGE_KEY).unwrap().unwrap();
    let stored: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), RECENT_KEYS_MAX_LENGTH);
    assert_eq!(stored.keys().next().map(String::as_str), Some("key-24"));
    assert_eq!(stored.keys().last().map(String::as_str), Some("key-15"));
}

#[test]
fn corrupt_history_value_reads_as_empty() {
    let (store, _tmp) = create_store();
    store.set(HISTORY_STORAGE_KEY, "[1, 2").unwrap();

    let service = HistoryService::new(store);
    assert!(service.list().is_empty());
    service.record_visit("fresh");
    assert_eq!(keys(&service), ["fresh"]);
}
