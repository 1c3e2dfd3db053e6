use crate::framework::{ActorStore, FrameworkError, StoreClient};
use async_trait::async_trait;

/// Shared plumbing for store-specific clients.
///
/// Implementors provide access to the inner [`StoreClient`] and a mapping from
/// [`FrameworkError`] to their own error type; `execute` and `query` come for
/// free.
#[async_trait]
pub trait ActorClient<S: ActorStore>: Send + Sync {
    /// The store-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map framework errors to the store-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Send a raw command.
    #[tracing::instrument(skip(self))]
    async fn execute(&self, command: S::Command) -> Result<S::Outcome, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().execute(command).await.map_err(Self::map_error)
    }

    /// Send a raw query.
    #[tracing::instrument(skip(self))]
    async fn query(&self, query: S::Query) -> Result<S::View, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().query(query).await.map_err(Self::map_error)
    }
}
