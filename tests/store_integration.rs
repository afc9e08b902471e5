//! Integration tests for the append-only user store

use skillgap::core::types::UserRecord;
use skillgap::store::UserStore;
use std::collections::BTreeMap;
use tempfile::tempdir;

fn record(name: &str) -> UserRecord {
    UserRecord {
        name: name.to_string(),
        status: "Student".to_string(),
        aspiring_role: "Data Analyst".to_string(),
        skills: BTreeMap::from([("SQL".to_string(), 4), ("Excel".to_string(), 7)]),
    }
}

/// Test 1: a store whose file does not exist yet is empty
#[test]
fn test_missing_file_is_empty_list() {
    let dir = tempdir().unwrap();
    let store = UserStore::new(&dir.path().join("users.json"));
    assert!(store.load().unwrap().is_empty());
}

/// Test 2: N appends leave exactly N records, in order, round-tripped intact
#[test]
fn test_append_accumulates_records() {
    let dir = tempdir().unwrap();
    let store = UserStore::new(&dir.path().join("users.json"));

    for name in ["Asha", "Ben", "Chitra"] {
        store.append(&record(name)).unwrap();
    }

    let records = store.load().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0], record("Asha"));
    assert_eq!(records[2].name, "Chitra");
    assert_eq!(store.len().unwrap(), 3);
}

/// Test 3: appends from a second store handle see the first one's records
#[test]
fn test_reopened_store_sees_existing_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("users.json");

    UserStore::new(&path).append(&record("Asha")).unwrap();
    let reopened = UserStore::new(&path);
    reopened.append(&record("Ben")).unwrap();

    assert_eq!(reopened.len().unwrap(), 2);
}

/// Test 4: a corrupt file is an error, not an empty list
#[test]
fn test_corrupt_file_fails_loudly() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("users.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = UserStore::new(&path);
    assert!(store.load().is_err());
    // and appending must not clobber the corrupt file with a fresh list
    assert!(store.append(&record("Asha")).is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}
