//! # Store Actor
//!
//! The server half: owns a store and the receiving end of its request channel.

use super::client::StoreClient;
use super::message::StoreRequest;
use super::store::ActorStore;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Owns one store and applies requests to it sequentially.
///
/// Each actor runs in its own task. Because only the loop in [`run`](Self::run)
/// ever touches `store`, every command sees the effects of all commands that
/// arrived before it.
///
/// 1. **Create**: `StoreActor::new(store, buffer)` returns the actor and a client.
/// 2. **Run**: `tokio::spawn(actor.run())`.
/// 3. **Use**: clone the client wherever it is needed.
///
/// The loop ends once every client has been dropped and the queue is drained.
pub struct StoreActor<S: ActorStore> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    store: S,
}

impl<S: ActorStore> StoreActor<S> {
    /// Wraps `store` and opens a request channel of capacity `buffer_size`.
    ///
    /// When the channel is full, client calls wait until there is space.
    /// A `buffer_size` of zero is raised to one.
    pub fn new(store: S, buffer_size: usize) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self { receiver, store };
        (actor, StoreClient::new(sender))
    }

    /// Processes requests until the channel closes.
    pub async fn run(mut self) {
        // "OrderStore" rather than "order_tracker::order_store::store::OrderStore"
        let store_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(store_type, "Actor started");

        let mut handled: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            handled += 1;
            match msg {
                StoreRequest::Execute {
                    command,
                    respond_to,
                } => {
                    debug!(store_type, ?command, "Execute");
                    let outcome = self.store.execute(command);
                    debug!(store_type, ?outcome, "Executed");
                    let _ = respond_to.send(Ok(outcome));
                }
                StoreRequest::Query { query, respond_to } => {
                    debug!(store_type, ?query, "Query");
                    let view = self.store.query(query);
                    let _ = respond_to.send(Ok(view));
                }
            }
        }

        info!(store_type, handled, "Shutdown");
    }
}
