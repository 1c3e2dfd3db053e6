//! # Machine Client
//!
//! High-level API for the machine actor.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, StoreClient};
use crate::machine_store::{
    MachineActionResult, MachineCommand, MachineError, MachineQuery, MachineStore, MachineView,
};
use crate::model::{Machine, MachineId, Order, Process};
use crate::outcome::{AssignOutcome, Outcome};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct MachineClient {
    inner: StoreClient<MachineStore>,
}

#[async_trait]
impl ActorClient<MachineStore> for MachineClient {
    type Error = MachineError;

    fn inner(&self) -> &StoreClient<MachineStore> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MachineError::ActorCommunicationError(e.to_string())
    }
}

impl MachineClient {
    pub fn new(inner: StoreClient<MachineStore>) -> Self {
        Self { inner }
    }

    /// Assigns `process` of `order` to a machine.
    ///
    /// The actor receives its own copies; later changes to `order` on the
    /// caller's side are not seen by the machine or its history.
    #[instrument(
        skip(self, order, process),
        fields(order_id = %order.order_id, process_id = %process.id)
    )]
    pub async fn assign_work(
        &self,
        machine_id: MachineId,
        order: &Order,
        process: &Process,
        operator: &str,
    ) -> Result<AssignOutcome, MachineError> {
        debug!("Sending request");
        let command = MachineCommand::Assign {
            machine_id,
            order: Box::new(order.clone()),
            process: Box::new(process.clone()),
            operator: operator.to_string(),
        };
        match self.execute(command).await? {
            MachineActionResult::Assign(outcome) => Ok(outcome),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn complete_work(&self, machine_id: MachineId) -> Result<Outcome, MachineError> {
        debug!("Sending request");
        match self.execute(MachineCommand::Complete(machine_id)).await? {
            MachineActionResult::Complete(outcome) => Ok(outcome),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_maintenance(&self, machine_id: MachineId) -> Result<Outcome, MachineError> {
        debug!("Sending request");
        match self.execute(MachineCommand::SetMaintenance(machine_id)).await? {
            MachineActionResult::SetMaintenance(outcome) => Ok(outcome),
            other => Err(unexpected(other)),
        }
    }

    pub async fn all_machines(&self) -> Result<Vec<Machine>, MachineError> {
        self.machines(MachineQuery::All).await
    }

    /// Idle machines at the time of the call.
    pub async fn available_machines(&self) -> Result<Vec<Machine>, MachineError> {
        self.machines(MachineQuery::Available).await
    }

    #[instrument(skip(self))]
    pub async fn find_machine(&self, machine_id: MachineId) -> Result<Option<Machine>, MachineError> {
        match self.query(MachineQuery::Find(machine_id)).await? {
            MachineView::Machine(machine) => Ok(machine),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    async fn machines(&self, query: MachineQuery) -> Result<Vec<Machine>, MachineError> {
        match self.query(query).await? {
            MachineView::Machines(machines) => Ok(machines),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(reply: impl std::fmt::Debug) -> MachineError {
    MachineError::UnexpectedReply(format!("{reply:?}"))
}
