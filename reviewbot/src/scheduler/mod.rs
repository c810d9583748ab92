//! Scheduler layer for the bot
//!
//! This layer drives the poll loop: it fetches statuses on every tick,
//! decides whether the recipient needs to hear about them, and applies the
//! failure policy.

pub mod poller;
pub mod ticker;

pub use poller::StatusPoller;
pub use ticker::{IntervalTicker, Ticker};
