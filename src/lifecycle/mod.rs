//! # System Lifecycle
//!
//! Starting and stopping the store actors as one unit.
//!
//! [`TrackerSystem::new`] builds the order and machine stores from a
//! [`TrackerConfig`](crate::config::TrackerConfig), spawns one actor per store,
//! and exposes their clients. [`TrackerSystem::shutdown`] closes the channels
//! by dropping the clients and then awaits each actor, which finishes whatever
//! is still queued before exiting.
//!
//! [`setup_tracing`] installs the log subscriber used by the binary.

pub mod tracing;
pub mod tracker_system;

pub use self::tracing::*;
pub use tracker_system::*;
