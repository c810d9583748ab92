//! Repository layer
//!
//! Narrow async traits over the two remote services, so the poll loop can be
//! driven by in-memory fakes in tests. The HTTP implementations delegate to
//! the clients in `reviewbot-client`.

mod notifier;
mod statuses;

// Re-export traits
pub use notifier::Notifier;
pub use statuses::StatusRepository;
