//! # Machine Store
//!
//! Machine availability, current work, and the assignment history of each
//! machine on the shop floor.
//!
//! - [`store`] - [`MachineStore`]
//! - [`actions`] - [`MachineCommand`] / [`MachineQuery`] and their results
//! - [`entity`] - [`ActorStore`](crate::framework::ActorStore) implementation
//! - [`error`] - [`MachineError`]
//!
//! A machine's history never follows later edits to an order: each entry keeps
//! the order and process as they were when the work was assigned.

pub mod actions;
pub mod entity;
pub mod error;
pub mod store;

pub use actions::*;
pub use error::*;
pub use store::MachineStore;

use crate::framework::{StoreActor, StoreClient};

/// Wraps `store` in an actor with a request queue of `capacity`.
pub fn new(
    store: MachineStore,
    capacity: usize,
) -> (StoreActor<MachineStore>, StoreClient<MachineStore>) {
    StoreActor::new(store, capacity)
}
