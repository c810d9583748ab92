//! Status poller
//!
//! Polls the status API on every tick and notifies the recipient when the
//! verdict for the most recent submission changes.
//!
//! The poller carries two pieces of state between cycles: the query cursor
//! and the last message that was successfully delivered. The cursor stays at
//! its configured start, so every cycle sees the full history from that
//! point and compares the most recent submission against what was last sent.

use reviewbot_core::{translate, validate};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::BotError;
use crate::repository::{Notifier, StatusRepository};
use crate::scheduler::Ticker;

/// Prefix of the message reporting a failed cycle to the recipient
const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// What a successful cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The response contained no submissions
    NoUpdates,
    /// The verdict matches the one already delivered
    Unchanged,
    /// A new verdict was delivered
    Notified,
    /// A new verdict was found but could not be delivered
    DeliveryFailed,
}

/// Poll loop holding the last delivered verdict
pub struct StatusPoller {
    statuses: Arc<dyn StatusRepository>,
    notifier: Arc<dyn Notifier>,
    cursor: i64,
    last_notified: String,
}

impl StatusPoller {
    /// Creates a new status poller
    pub fn new(
        config: &Config,
        statuses: Arc<dyn StatusRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            statuses,
            notifier,
            cursor: config.from_date,
            last_notified: String::new(),
        }
    }

    /// Cursor sent as `from_date` on the next cycle
    #[cfg(test)]
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Last message delivered to the recipient, empty before the first one
    #[cfg(test)]
    pub fn last_notified(&self) -> &str {
        &self.last_notified
    }

    /// Runs poll cycles until the ticker stops or a fatal error occurs
    ///
    /// # Errors
    /// Returns the first error for which [`BotError::is_fatal`] holds.
    /// All other failures are logged, reported, and absorbed.
    pub async fn run(&mut self, ticker: &mut dyn Ticker) -> Result<(), BotError> {
        info!("Starting status poller (from_date: {})", self.cursor);

        while ticker.tick().await {
            debug!("Polling homework statuses");

            match self.poll_once().await {
                Ok(outcome) => debug!("Poll cycle finished: {:?}", outcome),
                // Logged once by the caller
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    error!("Error during poll cycle: {}", e);
                    self.report_failure(&e).await;
                }
            }
        }

        info!("Status poller stopped");
        Ok(())
    }

    /// Performs a single poll cycle
    pub async fn poll_once(&mut self) -> Result<CycleOutcome, BotError> {
        let response = self.statuses.fetch(self.cursor).await?;
        let statuses = validate(&response)?;

        debug!(
            "Received {} homework record(s), server time {:?}",
            statuses.homeworks.len(),
            statuses.server_time()
        );

        let Some(latest) = statuses.latest() else {
            debug!("No homework updates since {}", self.cursor);
            return Ok(CycleOutcome::NoUpdates);
        };

        let message = translate(latest)?;

        if message == self.last_notified {
            debug!("Homework status unchanged");
            return Ok(CycleOutcome::Unchanged);
        }

        match self.notifier.notify(&message).await {
            Ok(()) => {
                info!("Notification sent: {}", message);
                self.last_notified = message;
                Ok(CycleOutcome::Notified)
            }
            Err(e) => {
                error!("Failed to send notification: {}", e);
                Ok(CycleOutcome::DeliveryFailed)
            }
        }
    }

    /// Tells the recipient that a cycle failed
    ///
    /// Best effort: a delivery failure is logged and otherwise ignored.
    async fn report_failure(&self, err: &BotError) {
        let message = format!("{}: {}", FAILURE_PREFIX, err);

        if let Err(e) = self.notifier.notify(&message).await {
            warn!("Failed to report poll failure: {}", e);
        }
    }
}
