use crate::config::{default_fleet, DispatchPolicy, MachineSpec};
use crate::model::{CurrentWork, Machine, MachineId, MachineLog, Order, Process};
use crate::outcome::{AssignOutcome, Outcome};
use chrono::Utc;
use tracing::{debug, info, warn};

/// Machine availability and work assignment.
///
/// Machines are kept in fleet order. Transitions:
///
/// ```text
/// Idle --assign--> Busy --complete--> Idle
/// Idle/Busy --maintenance--> OnRepair
/// OnRepair --assign--> Busy
/// OnRepair --complete--> Idle
/// ```
///
/// Assignment does not check status, and `complete_work` frees any machine,
/// so completing a machine under repair is how it returns to service.
#[derive(Debug, Clone)]
pub struct MachineStore {
    machines: Vec<Machine>,
    policy: DispatchPolicy,
}

impl Default for MachineStore {
    fn default() -> Self {
        Self::with_fleet(
            default_fleet().iter().map(MachineSpec::to_machine).collect(),
            DispatchPolicy::default(),
        )
    }
}

impl MachineStore {
    /// An empty store.
    pub fn new(policy: DispatchPolicy) -> Self {
        Self::with_fleet(Vec::new(), policy)
    }

    pub fn with_fleet(machines: Vec<Machine>, policy: DispatchPolicy) -> Self {
        Self { machines, policy }
    }

    /// Puts `process` of `order` on a machine and records the assignment.
    ///
    /// The machine keeps its own copy of the order and process, and the history
    /// entry gets another; the caller's values are never shared. A machine that
    /// is already running something has that work replaced.
    pub fn assign_work(
        &mut self,
        machine_id: &MachineId,
        order: &Order,
        process: &Process,
        operator: &str,
    ) -> AssignOutcome {
        let action = self.policy.assign_action.clone();
        let Some(machine) = self.machine_mut(machine_id) else {
            debug!(%machine_id, "Assign: not found");
            return AssignOutcome::NotFound;
        };

        let log = MachineLog {
            timestamp: Utc::now(),
            action,
            order_context: order.clone(),
            sub_task_context: process.clone(),
            operator: operator.to_string(),
            note: None,
        };
        let work = CurrentWork {
            order: order.clone(),
            process: process.clone(),
        };

        let previous = machine.begin(work, log);
        info!(
            %machine_id,
            order_id = %order.order_id,
            process_id = %process.id,
            operator,
            "Work assigned"
        );

        match previous {
            Some(previous) => {
                warn!(
                    %machine_id,
                    replaced_order = %previous.order.order_id,
                    replaced_process = %previous.process.id,
                    "Machine was busy, previous work replaced"
                );
                AssignOutcome::Overwritten(Box::new(previous))
            }
            None => AssignOutcome::Assigned,
        }
    }

    /// Frees the machine, whatever its status. History is left untouched.
    pub fn complete_work(&mut self, machine_id: &MachineId) -> Outcome {
        let Some(machine) = self.machine_mut(machine_id) else {
            debug!(%machine_id, "Complete: not found");
            return Outcome::NotFound;
        };
        machine.release();
        info!(%machine_id, "Work completed");
        Outcome::Applied
    }

    /// Sends the machine for repair.
    ///
    /// Current work stays attached unless the dispatch policy says to clear it.
    pub fn set_maintenance(&mut self, machine_id: &MachineId) -> Outcome {
        let clear_work = self.policy.clear_work_on_maintenance;
        let Some(machine) = self.machine_mut(machine_id) else {
            debug!(%machine_id, "Maintenance: not found");
            return Outcome::NotFound;
        };
        machine.send_to_repair(clear_work);
        info!(%machine_id, clear_work, "Machine under repair");
        Outcome::Applied
    }

    pub fn all_machines(&self) -> &[Machine] {
        &self.machines
    }

    /// Idle machines, in fleet order.
    pub fn available_machines(&self) -> Vec<&Machine> {
        self.machines.iter().filter(|m| m.is_available()).collect()
    }

    pub fn find_machine(&self, machine_id: &MachineId) -> Option<&Machine> {
        self.machines.iter().find(|m| &m.id == machine_id)
    }

    pub fn policy(&self) -> &DispatchPolicy {
        &self.policy
    }

    fn machine_mut(&mut self, machine_id: &MachineId) -> Option<&mut Machine> {
        self.machines.iter_mut().find(|m| &m.id == machine_id)
    }
}
