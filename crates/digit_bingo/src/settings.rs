//! Persisted user preferences.

use tracing::{info, instrument, warn};

use crate::storage::KeyValueStore;

/// Storage key holding the vibration flag.
pub const VIBRATION_KEY: &str = "settings_vibration_enabled_v1";

/// Preferences stored as `"1"`/`"0"` strings.
///
/// Missing or unreadable values read as the default; write failures are
/// logged and dropped.
#[derive(Debug)]
pub struct Settings<K> {
    store: K,
}

impl<K: KeyValueStore> Settings<K> {
    /// Creates settings over `store`.
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// Whether vibration feedback is on. True when nothing is stored;
    /// otherwise only a stored `"1"` counts as on.
    #[instrument(skip(self))]
    pub fn vibration_enabled(&self) -> bool {
        match self.store.get(VIBRATION_KEY) {
            Ok(Some(value)) => value == "1",
            Ok(None) => true,
            Err(e) => {
                warn!(error = %e, "Could not read vibration setting, using default");
                true
            }
        }
    }

    /// Stores the vibration flag.
    #[instrument(skip(self))]
    pub fn set_vibration_enabled(&self, enabled: bool) {
        let value = if enabled { "1" } else { "0" };
        match self.store.set(VIBRATION_KEY, value) {
            Ok(()) => info!(enabled, "Vibration setting saved"),
            Err(e) => warn!(error = %e, "Could not save vibration setting"),
        }
    }

    /// Flips the vibration flag and returns the new value.
    #[instrument(skip(self))]
    pub fn toggle_vibration(&self) -> bool {
        let enabled = !self.vibration_enabled();
        self.set_vibration_enabled(enabled);
        enabled
    }
}
