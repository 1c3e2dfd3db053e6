//! Messages exchanged between a [`StoreClient`](super::StoreClient) and its
//! [`StoreActor`](super::StoreActor).

use super::error::FrameworkError;
use super::store::ActorStore;
use tokio::sync::oneshot;

/// One-shot channel an actor answers on.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request queued for a store actor.
///
/// Commands may change state; queries never do. Both carry their own reply
/// channel, so a client can fire a request and await just its answer.
#[derive(Debug)]
pub enum StoreRequest<S: ActorStore> {
    Execute {
        command: S::Command,
        respond_to: Response<S::Outcome>,
    },
    Query {
        query: S::Query,
        respond_to: Response<S::View>,
    },
}
