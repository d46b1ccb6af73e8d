use std::fs;

use star_defender::store::*;

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
    }
}

// ── load / save helpers ───────────────────────────────────────────────────────

#[test]
fn empty_store_has_no_high_score() {
    assert_eq!(load_high_score(&MemoryStore::new()), 0);
}

#[test]
fn save_only_when_beaten() {
    let mut store = MemoryStore::new();
    store.set(HIGH_SCORE_KEY, "10000").unwrap();

    assert!(save_high_score(&mut store, 12_000));
    assert_eq!(load_high_score(&store), 12_000);

    assert!(!save_high_score(&mut store, 5_000));
    assert!(!save_high_score(&mut store, 12_000));
    assert_eq!(load_high_score(&store), 12_000);
}

#[test]
fn unparsable_value_reads_as_zero() {
    let mut store = MemoryStore::new();
    store.set(HIGH_SCORE_KEY, "lots").unwrap();
    assert_eq!(load_high_score(&store), 0);
}

#[test]
fn read_failure_reads_as_zero() {
    assert_eq!(load_high_score(&BrokenStore), 0);
}

#[test]
fn write_failure_is_swallowed() {
    assert!(!save_high_score(&mut BrokenStore, 100));
}

// ── JSON file store ───────────────────────────────────────────────────────────

#[test]
fn file_store_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("scores.json"));
    assert_eq!(store.get(HIGH_SCORE_KEY).unwrap(), None);
    assert_eq!(load_high_score(&store), 0);
}

#[test]
fn file_store_persists_between_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let mut store = JsonFileStore::new(&path);
    assert!(save_high_score(&mut store, 4_250));

    let reopened = JsonFileStore::new(&path);
    assert_eq!(load_high_score(&reopened), 4_250);
}

#[test]
fn file_store_keeps_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("scores.json"));
    store.set("volume", "7").unwrap();
    store.set(HIGH_SCORE_KEY, "80").unwrap();
    assert_eq!(store.get("volume").unwrap().as_deref(), Some("7"));
    assert_eq!(store.get(HIGH_SCORE_KEY).unwrap().as_deref(), Some("80"));
}

#[test]
fn file_store_corrupt_file_reads_as_zero_and_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    fs::write(&path, "{ not json").unwrap();

    let mut store = JsonFileStore::new(&path);
    assert!(store.get(HIGH_SCORE_KEY).is_err());
    assert_eq!(load_high_score(&store), 0);

    assert!(save_high_score(&mut store, 30));
    assert_eq!(load_high_score(&store), 30);
}

#[test]
fn file_store_io_failure_is_reported_not_replaced() {
    // A directory in place of the file fails to read with an i/o error
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path());
    let err = store.set(HIGH_SCORE_KEY, "10").unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
    assert!(!save_high_score(&mut store, 10));
    assert!(dir.path().is_dir());
}
