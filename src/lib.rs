//! # Order Tracker
//!
//! In-memory core for tracking manufacturing orders: the review workflow that
//! moves an order from pending to approved or rejected, and the bookkeeping of
//! which machine runs which production step.
//!
//! ## Design
//!
//! ### Stores own their state
//! [`OrderStore`](order_store::OrderStore) owns the three audit pools and is
//! the only thing that changes an order's audit status.
//! [`MachineStore`](machine_store::MachineStore) owns machine status, current
//! work and assignment history. The stores never call each other.
//!
//! ### Outcomes, not silence
//! An unknown id is not an error, but every operation says what happened:
//! [`Outcome`](outcome::Outcome), [`AuditOutcome`](outcome::AuditOutcome) and
//! [`AssignOutcome`](outcome::AssignOutcome) are `#[must_use]`.
//!
//! ### Snapshots by value
//! A machine's history keeps its own clone of the order and process at the
//! time of assignment. Nothing is shared, so later edits cannot leak into it.
//!
//! ### One actor per store
//! For concurrent callers, each store runs inside a
//! [`StoreActor`](framework::StoreActor) that applies requests one at a time.
//! Two reviewers approving and rejecting the same order race harmlessly: one
//! wins, the other gets `AlreadyDecided`.
//!
//! ## Module Tour
//!
//! - [`model`] - Order, Process, Alert, Machine, Todo
//! - [`order_store`] / [`machine_store`] - the state machines
//! - [`framework`] - generic store actor, client and mocks
//! - [`clients`] - typed async clients
//! - [`lifecycle`] - [`TrackerSystem`](lifecycle::TrackerSystem) and tracing setup
//! - [`config`] - TOML configuration
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -- --config config/tracker.example.toml
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod machine_store;
pub mod model;
pub mod order_store;
pub mod outcome;
