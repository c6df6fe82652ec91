//! JSON file state store

use pgmetrics_domain::{MetricSnapshot, MetricValue};
use pgmetrics_providers::SnapshotStateStore;
use pgmetrics_providers::state::FileStateStore;

fn snapshot() -> MetricSnapshot {
    [
        ("count", MetricValue::Integer(5)),
        ("sum", MetricValue::Float(42.5)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_missing_file_loads_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileStateStore::new(dir.path().join("state.json"));
    assert!(store.load().expect("load").is_none());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileStateStore::new(dir.path().join("state.json"));

    store.save(&snapshot(), 1_700_000_000).expect("save");
    let stored = store.load().expect("load").expect("stored");
    assert_eq!(stored.timestamp, 1_700_000_000);
    assert_eq!(stored.snapshot, snapshot());
}

#[test]
fn test_file_layout_is_flat_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");
    FileStateStore::new(&path)
        .save(&snapshot(), 99)
        .expect("save");

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(json["count"], 5);
    assert_eq!(json["sum"], 42.5);
    assert_eq!(json["_lastTime"], 99);
}

#[test]
fn test_save_replaces_previous_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileStateStore::new(dir.path().join("state.json"));

    store.save(&snapshot(), 1).expect("first save");
    let next: MetricSnapshot = [("count", MetricValue::Integer(6))].into_iter().collect();
    store.save(&next, 2).expect("second save");

    let stored = store.load().expect("load").expect("stored");
    assert_eq!(stored.timestamp, 2);
    assert_eq!(stored.snapshot, next);
    assert_eq!(std::fs::read_dir(dir.path()).expect("dir").count(), 1);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{not json").expect("write");
    assert!(FileStateStore::new(&path).load().is_err());
}

#[test]
fn test_float_last_time_is_accepted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");
    std::fs::write(&path, r#"{"count":3,"sum":1.5,"_lastTime":1700000000.0}"#)
        .expect("write state");

    let stored = FileStateStore::new(&path)
        .load()
        .expect("load")
        .expect("stored");
    assert_eq!(stored.timestamp, 1_700_000_000);
    assert_eq!(stored.snapshot.get("count"), Some(MetricValue::Integer(3)));
    assert_eq!(stored.snapshot.get("sum"), Some(MetricValue::Float(1.5)));
}
