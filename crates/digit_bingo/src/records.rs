//! Persistent list of won rounds.

use derive_getters::Getters;
use digit_bingo_core::{Mode, RecordEntry, RecordSink, format_clock};
use tracing::{debug, info, instrument, warn};

use crate::storage::{KeyValueStore, StoreError};

/// Storage key holding the JSON record list.
pub const RECORDS_KEY: &str = "digit_bingo_records_v1";

/// Most records kept; older ones are dropped.
pub const MAX_RECORDS: usize = 100;

/// Won rounds stored newest first under [`RECORDS_KEY`].
///
/// Reads fall back to an empty list and writes are dropped when the
/// store fails or holds malformed data. Failures are logged, never raised.
#[derive(Debug)]
pub struct RecordBook<K> {
    store: K,
}

impl<K: KeyValueStore> RecordBook<K> {
    /// Creates a record book over `store`.
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// Stored records, newest first. Empty if none are stored or the
    /// stored value cannot be read.
    #[instrument(skip(self))]
    pub fn get_records(&self) -> Vec<RecordEntry> {
        match self.load() {
            Ok(records) => {
                debug!(count = records.len(), "Records loaded");
                records
            }
            Err(e) => {
                warn!(error = %e, "Could not read records, showing none");
                Vec::new()
            }
        }
    }

    /// Deletes every stored record.
    #[instrument(skip(self))]
    pub fn clear_records(&self) {
        match self.store.remove(RECORDS_KEY) {
            Ok(()) => info!("Records cleared"),
            Err(e) => warn!(error = %e, "Could not clear records"),
        }
    }

    /// Summary statistics over the stored records.
    #[instrument(skip(self))]
    pub fn stats(&self) -> RecordStats {
        RecordStats::from_records(&self.get_records())
    }

    fn load(&self) -> Result<Vec<RecordEntry>, StoreError> {
        match self.store.get(RECORDS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, entry: RecordEntry) -> Result<usize, StoreError> {
        let mut records = self.load()?;
        records.insert(0, entry);
        records.truncate(MAX_RECORDS);
        let raw = serde_json::to_string(&records)?;
        self.store.set(RECORDS_KEY, &raw)?;
        Ok(records.len())
    }
}

impl<K: KeyValueStore> RecordSink for RecordBook<K> {
    #[instrument(skip(self, entry), fields(mode = %entry.mode(), tries = entry.tries(), time_sec = entry.time_sec()))]
    fn add_record(&self, entry: RecordEntry) {
        match self.save(entry) {
            Ok(count) => info!(count, "Record saved"),
            Err(e) => warn!(error = %e, "Could not save record"),
        }
    }
}

/// Totals and bests over a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct RecordStats {
    /// Number of records.
    total: usize,
    /// Solo wins.
    solo: usize,
    /// Duel wins.
    duel: usize,
    /// Fewest tries in any record.
    best_tries: Option<u32>,
    /// Shortest time in any record.
    best_time_sec: Option<u32>,
}

impl RecordStats {
    /// Computes statistics from `records`.
    #[instrument(skip(records), fields(count = records.len()))]
    pub fn from_records(records: &[RecordEntry]) -> Self {
        let count_mode = |mode: Mode| records.iter().filter(|r| *r.mode() == mode).count();
        Self {
            total: records.len(),
            solo: count_mode(Mode::Solo),
            duel: count_mode(Mode::Duel),
            best_tries: records.iter().map(|r| *r.tries()).min(),
            best_time_sec: records.iter().map(|r| *r.time_sec()).min(),
        }
    }
}

/// One listing line: mode label, tries, time and the UTC date it was won.
pub fn format_record(entry: &RecordEntry) -> String {
    let date = chrono::DateTime::from_timestamp_millis(*entry.created_at())
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown date".to_string());
    format!(
        "{:<11}  {:>3} tries  {}  {}",
        entry.mode().label(),
        entry.tries(),
        format_clock(*entry.time_sec()),
        date
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn record(mode: Mode, tries: u32, time_sec: u32) -> RecordEntry {
        RecordEntry::new(mode, tries, time_sec)
    }

    #[test]
    fn test_empty_book_has_no_records() {
        let book = RecordBook::new(MemoryStore::new());
        assert!(book.get_records().is_empty());
        assert_eq!(book.stats(), RecordStats::default());
    }

    #[test]
    fn test_stats_over_mixed_modes() {
        let records = vec![
            record(Mode::Solo, 6, 80),
            record(Mode::Duel, 4, 120),
            record(Mode::Solo, 9, 45),
        ];
        let stats = RecordStats::from_records(&records);
        assert_eq!(*stats.total(), 3);
        assert_eq!(*stats.solo(), 2);
        assert_eq!(*stats.duel(), 1);
        assert_eq!(*stats.best_tries(), Some(4));
        assert_eq!(*stats.best_time_sec(), Some(45));
    }

    #[test]
    fn test_format_record_line() {
        let entry = RecordEntry::with_fields(
            "id".to_string(),
            Mode::Duel,
            7,
            125,
            1_700_000_000_000,
        );
        assert_eq!(
            format_record(&entry),
            "Friend Duel    7 tries  02:05  2023-11-14 22:13"
        );
    }
}
