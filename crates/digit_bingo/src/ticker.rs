//! One-second clock ticks for a running round.
//!
//! A [`Ticker`] drives a tokio interval task that sends [`Tick`]s over a
//! channel. Each start and stop bumps a generation counter and every tick
//! carries the generation it was sent under, so a consumer can drop ticks
//! that were already queued when the ticker stopped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, instrument, trace};

/// A single clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
}

impl Tick {
    /// The ticker generation this tick was sent under.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Starts and stops a periodic tick task.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    tx: mpsc::UnboundedSender<Tick>,
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Creates a stopped ticker and the receiver its ticks arrive on.
    #[instrument]
    pub fn new(period: Duration) -> (Self, mpsc::UnboundedReceiver<Tick>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let ticker = Self {
            period,
            tx,
            generation: 0,
            task: None,
        };
        (ticker, rx)
    }

    /// Starts ticking one period from now. Does nothing if already running.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn start(&mut self) {
        if self.task.is_some() {
            return;
        }
        self.generation += 1;
        let generation = self.generation;
        let period = self.period;
        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                trace!(generation, "Tick");
                if tx.send(Tick { generation }).is_err() {
                    break;
                }
            }
        }));
        debug!(generation, "Ticker started");
    }

    /// Stops ticking. Ticks already queued become stale. Safe to call
    /// repeatedly.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.generation += 1;
            debug!(generation = self.generation, "Ticker stopped");
        }
    }

    /// Starts or stops to match `running`.
    pub fn sync(&mut self, running: bool) {
        match (running, self.is_running()) {
            (true, false) => self.start(),
            (false, true) => self.stop(),
            _ => {}
        }
    }

    /// Whether the tick task is live.
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// True if `tick` was sent by the current run.
    pub fn is_current(&self, tick: Tick) -> bool {
        self.task.is_some() && tick.generation == self.generation
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
