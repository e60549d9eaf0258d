//! Elapsed-time bookkeeping for a round.
//!
//! The clock does not keep time itself. Something outside the round
//! delivers one [`RoundClock::tick`] per second; the clock only counts
//! ticks that arrive while it is running.

use tracing::{instrument, trace};

/// Seconds elapsed in a round plus a running flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundClock {
    elapsed: u32,
    running: bool,
}

impl RoundClock {
    /// A stopped clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets to zero and starts counting.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.elapsed = 0;
        self.running = true;
    }

    /// Continues counting from the retained value.
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Stops counting. Safe to call when already stopped.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stops and returns to zero.
    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.running = false;
    }

    /// Counts one second if running. Returns whether the tick was counted.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed = self.elapsed.saturating_add(1);
            trace!(elapsed = self.elapsed, "Tick");
        }
        self.running
    }

    /// Seconds counted so far.
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// True while ticks are being counted.
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl std::fmt::Display for RoundClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_clock(self.elapsed))
    }
}

/// Formats seconds as zero-padded `MM:SS`. Minutes keep growing past 59.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
