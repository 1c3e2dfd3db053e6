use crate::clients::{MachineClient, OrderClient};
use crate::config::{ConfigError, TrackerConfig};
use crate::machine_store::{self, MachineStore};
use crate::order_store::{self, OrderStore};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),
}

/// Runs the order and machine actors and hands out their clients.
///
/// The two stores never talk to each other. Keeping "approved" and "on a
/// machine" consistent is up to whoever holds the clients.
///
/// ```rust
/// use order_tracker::config::TrackerConfig;
/// use order_tracker::lifecycle::TrackerSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = TrackerSystem::new(&TrackerConfig::default())?;
///     let idle = system.machine_client.available_machines().await?;
///     assert_eq!(idle.len(), 4);
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct TrackerSystem {
    pub order_client: OrderClient,
    pub machine_client: MachineClient,
    handles: Vec<JoinHandle<()>>,
}

impl TrackerSystem {
    /// Validates `config`, builds both stores from it and spawns their actors.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &TrackerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let capacity = config.runtime.channel_capacity;

        let orders = OrderStore::new(config.audit.clone());
        let machines = MachineStore::with_fleet(config.fleet(), config.dispatch.clone());

        let (order_actor, order_client) = order_store::new(orders, capacity);
        let (machine_actor, machine_client) = machine_store::new(machines, capacity);

        let order_handle = tokio::spawn(order_actor.run());
        let machine_handle = tokio::spawn(machine_actor.run());
        info!(capacity, machines = config.machines.len(), "Tracker started");

        Ok(Self {
            order_client: OrderClient::new(order_client),
            machine_client: MachineClient::new(machine_client),
            handles: vec![order_handle, machine_handle],
        })
    }

    /// Drops the clients and waits for every actor to drain its queue.
    ///
    /// Clones of the clients held elsewhere keep their actor alive, so drop
    /// those first.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down tracker...");

        drop(self.order_client);
        drop(self.machine_client);

        let mut failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                failure.get_or_insert_with(|| ShutdownError::ActorTaskFailed(e.to_string()));
            }
        }

        match failure {
            Some(err) => Err(err),
            None => {
                info!("Tracker shutdown complete.");
                Ok(())
            }
        }
    }
}
