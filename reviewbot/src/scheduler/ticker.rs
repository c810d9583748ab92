//! Poll scheduling
//!
//! The poll loop waits on a [`Ticker`] before each cycle. Production code
//! uses [`IntervalTicker`]; tests use a ticker that stops after a fixed number
//! of cycles, so the loop can be exercised without wall-clock waits.

use async_trait::async_trait;
use tokio::time::{self, Duration, Interval, MissedTickBehavior};

/// Paces the poll loop
#[async_trait]
pub trait Ticker: Send {
    /// Waits until the next cycle is due
    ///
    /// Returns `false` when no further cycles should run.
    async fn tick(&mut self) -> bool;
}

/// Ticker backed by [`tokio::time::Interval`]
///
/// The first tick completes immediately. A cycle that overruns the period
/// pushes the following ticks back instead of firing them in a burst.
pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    /// Creates a ticker firing every `period`
    ///
    /// Must be called from within a tokio runtime. `period` must be non-zero.
    pub fn new(period: Duration) -> Self {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}

/// Ticker that allows a fixed number of cycles and then stops
#[cfg(test)]
pub(crate) struct LimitedTicker {
    remaining: usize,
}

#[cfg(test)]
impl LimitedTicker {
    pub(crate) fn new(cycles: usize) -> Self {
        Self { remaining: cycles }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.remaining
    }
}

#[cfg(test)]
#[async_trait]
impl Ticker for LimitedTicker {
    async fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}
