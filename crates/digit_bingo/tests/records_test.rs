//! Tests for the record book over memory and SQLite storage.

use digit_bingo::{
    KeyValueStore, MAX_RECORDS, MemoryStore, RECORDS_KEY, RecordBook, SqliteStore, StoreError,
};
use digit_bingo_core::{Mode, RecordEntry, RecordSink};
use tempfile::NamedTempFile;

/// Creates a temporary database file and a store over it. The file handle
/// must stay in scope to keep the file alive.
fn setup_sqlite() -> (NamedTempFile, SqliteStore) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    let store = SqliteStore::open(db_path).expect("Failed to open store");
    (db_file, store)
}

/// A store whose every call fails.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::new("disk on fire"))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::new("disk on fire"))
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::new("disk on fire"))
    }
}

#[test]
fn test_cap_keeps_newest_hundred() {
    let book = RecordBook::new(MemoryStore::new());
    for tries in 1..=101 {
        book.add_record(RecordEntry::new(Mode::Solo, tries, 0));
    }

    let records = book.get_records();
    assert_eq!(records.len(), MAX_RECORDS);
    assert_eq!(*records[0].tries(), 101);
    assert_eq!(*records[99].tries(), 2);
    assert!(records.iter().all(|r| *r.tries() != 1), "oldest evicted");
}

#[test]
fn test_clear_then_get_is_empty() {
    let book = RecordBook::new(MemoryStore::new());
    book.add_record(RecordEntry::new(Mode::Duel, 4, 30));
    book.clear_records();
    assert!(book.get_records().is_empty());

    // Clearing an empty book is fine too.
    book.clear_records();
    assert!(book.get_records().is_empty());
}

#[test]
fn test_malformed_json_reads_as_empty() {
    let store = MemoryStore::new();
    store.set(RECORDS_KEY, "{not json").unwrap();
    let book = RecordBook::new(&store);
    assert!(book.get_records().is_empty());

    // The new record is dropped and the unreadable value stays as it was.
    book.add_record(RecordEntry::new(Mode::Solo, 3, 9));
    assert_eq!(store.get(RECORDS_KEY).unwrap().as_deref(), Some("{not json"));
}

#[test]
fn test_storage_failures_are_swallowed() {
    let book = RecordBook::new(BrokenStore);
    book.add_record(RecordEntry::new(Mode::Solo, 3, 9));
    book.clear_records();
    assert!(book.get_records().is_empty());
    assert_eq!(*book.stats().total(), 0);
}

#[test]
fn test_stored_json_uses_wire_names() {
    let store = MemoryStore::new();
    let book = RecordBook::new(&store);
    book.add_record(RecordEntry::with_fields(
        "r1".to_string(),
        Mode::Solo,
        6,
        75,
        1_700_000_000_000,
    ));

    let raw = store.get(RECORDS_KEY).unwrap().expect("stored");
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": "r1",
            "mode": "solo",
            "tries": 6,
            "timeSec": 75,
            "createdAt": 1_700_000_000_000i64,
        }])
    );
}

#[test]
fn test_sqlite_records_survive_reopen() {
    let (db_file, store) = setup_sqlite();
    let book = RecordBook::new(store);
    book.add_record(RecordEntry::new(Mode::Solo, 8, 100));
    book.add_record(RecordEntry::new(Mode::Duel, 5, 60));

    let reopened = SqliteStore::open(db_file.path().to_str().unwrap().to_string())
        .expect("Failed to reopen store");
    let records = RecordBook::new(reopened).get_records();
    assert_eq!(records.len(), 2);
    assert_eq!(*records[0].mode(), Mode::Duel);
    assert_eq!(*records[1].mode(), Mode::Solo);
}

#[test]
fn test_sqlite_store_roundtrip_and_remove() {
    let (_db, store) = setup_sqlite();
    assert_eq!(store.get("missing").unwrap(), None);

    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));

    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}
