//! Application layer: order intake, notification dispatch and payment intents.
//!
//! Services here depend only on the domain ports, so the in-memory store and the
//! provider clients can be swapped for fakes in tests.

pub mod notifier;
pub mod orders;
pub mod payments;
pub mod templates;
