use std::fmt::Debug;

/// A store that can be owned and driven by a [`StoreActor`](super::StoreActor).
///
/// Associated types keep each store's messages apart: an order command cannot be
/// sent to the machine actor.
///
/// Both methods are synchronous. A store does no I/O; "not found" is reported in
/// `Outcome`/`View`, never as an error.
pub trait ActorStore: Send + 'static {
    /// State-changing requests.
    type Command: Send + Debug;

    /// What a command reports back.
    type Outcome: Send + Debug;

    /// Read-only requests.
    type Query: Send + Debug;

    /// What a query returns. Always an owned copy of store state.
    type View: Send + Debug;

    fn execute(&mut self, command: Self::Command) -> Self::Outcome;

    fn query(&self, query: Self::Query) -> Self::View;
}
