//! Completed-round summaries and the sink that stores them.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which kind of round produced a record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// The device holds the secret.
    Solo,
    /// The opponent holds the secret.
    Duel,
}

impl Mode {
    /// Label shown in record listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Solo => "Solo",
            Self::Duel => "Friend Duel",
        }
    }
}

/// Summary of one won round.
///
/// Serialized as `{id, mode, tries, timeSec, createdAt}` with `createdAt`
/// in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct RecordEntry {
    /// Unique record id.
    id: String,
    /// Round kind.
    mode: Mode,
    /// Guesses it took, including the winning one.
    tries: u32,
    /// Seconds on the clock at the win.
    time_sec: u32,
    /// Epoch milliseconds when the record was created.
    created_at: i64,
}

impl RecordEntry {
    /// Creates a record stamped with a fresh id and the current time.
    #[instrument]
    pub fn new(mode: Mode, tries: u32, time_sec: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            mode,
            tries,
            time_sec,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Creates a record with every field given.
    pub fn with_fields(id: String, mode: Mode, tries: u32, time_sec: u32, created_at: i64) -> Self {
        Self {
            id,
            mode,
            tries,
            time_sec,
            created_at,
        }
    }
}

/// Append-only destination for won rounds.
///
/// Writes are fire-and-forget: an implementation must swallow its own
/// storage failures rather than report them to the round.
pub trait RecordSink {
    /// Stores `entry` as the newest record.
    fn add_record(&self, entry: RecordEntry);
}

impl<T: RecordSink + ?Sized> RecordSink for &T {
    fn add_record(&self, entry: RecordEntry) {
        (**self).add_record(entry)
    }
}

impl<T: RecordSink + ?Sized> RecordSink for std::rc::Rc<T> {
    fn add_record(&self, entry: RecordEntry) {
        (**self).add_record(entry)
    }
}

/// A sink that drops every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardRecords;

impl RecordSink for DiscardRecords {
    fn add_record(&self, _entry: RecordEntry) {}
}
