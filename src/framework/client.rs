//! # Store Client
//!
//! The caller half of a store actor.

use super::error::FrameworkError;
use super::message::StoreRequest;
use super::store::ActorStore;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle to a running [`StoreActor`](super::StoreActor).
///
/// Holds only a sender, so cloning is cheap and clones can be moved into other
/// tasks freely.
pub struct StoreClient<S: ActorStore> {
    sender: mpsc::Sender<StoreRequest<S>>,
}

// Manual impl: a derive would require `S: Clone`.
impl<S: ActorStore> Clone for StoreClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: ActorStore> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>) -> Self {
        Self { sender }
    }

    pub async fn execute(&self, command: S::Command) -> Result<S::Outcome, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Execute {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn query(&self, query: S::Query) -> Result<S::View, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Query { query, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
