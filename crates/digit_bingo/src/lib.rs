//! Digit Bingo application layer.
//!
//! Wraps the pure round logic from [`digit_bingo_core`] with everything a
//! playable program needs.
//!
//! # Architecture
//!
//! - **Storage**: a [`KeyValueStore`] seam with SQLite ([`SqliteStore`]) and
//!   in-memory ([`MemoryStore`]) implementations
//! - **Records**: [`RecordBook`], the capped newest-first list of won rounds
//! - **Settings**: [`Settings`], the persisted vibration flag
//! - **Session**: a line-oriented terminal [`Session`] driven by a tokio [`Ticker`]
//!
//! # Example
//!
//! ```
//! use digit_bingo::{MemoryStore, RecordBook};
//! use digit_bingo_core::{Mode, RecordEntry, RecordSink};
//!
//! let book = RecordBook::new(MemoryStore::new());
//! book.add_record(RecordEntry::new(Mode::Solo, 5, 42));
//! assert_eq!(book.get_records().len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod records;
mod session;
mod settings;
mod storage;
mod ticker;

pub mod cli;

pub use config::{AppConfig, ConfigError};
pub use records::{MAX_RECORDS, RECORDS_KEY, RecordBook, RecordStats, format_record};
pub use session::{Input, InputError, Reply, Session, parse_input};
pub use settings::{Settings, VIBRATION_KEY};
pub use storage::{KeyValueStore, KvEntry, MemoryStore, SqliteStore, StoreError};
pub use ticker::{Tick, Ticker};
