//! Tests for persisted settings.

use digit_bingo::{KeyValueStore, MemoryStore, Settings, SqliteStore, VIBRATION_KEY};
use tempfile::NamedTempFile;

#[test]
fn test_vibration_defaults_on() {
    let settings = Settings::new(MemoryStore::new());
    assert!(settings.vibration_enabled());
}

#[test]
fn test_vibration_written_as_one_or_zero() {
    let store = MemoryStore::new();
    let settings = Settings::new(&store);

    settings.set_vibration_enabled(false);
    assert_eq!(store.get(VIBRATION_KEY).unwrap().as_deref(), Some("0"));
    assert!(!settings.vibration_enabled());

    assert!(settings.toggle_vibration());
    assert_eq!(store.get(VIBRATION_KEY).unwrap().as_deref(), Some("1"));
    assert!(settings.vibration_enabled());
}

#[test]
fn test_unexpected_stored_value_reads_off() {
    let store = MemoryStore::new();
    store.set(VIBRATION_KEY, "yes").unwrap();
    assert!(!Settings::new(&store).vibration_enabled());
}

#[test]
fn test_vibration_persists_in_sqlite() {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    Settings::new(SqliteStore::open(db_path.clone()).unwrap()).set_vibration_enabled(false);
    let reopened = Settings::new(SqliteStore::open(db_path).unwrap());
    assert!(!reopened.vibration_enabled());
}
