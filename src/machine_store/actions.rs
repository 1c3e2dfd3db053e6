use crate::model::{Machine, MachineId, Order, Process};
use crate::outcome::{AssignOutcome, Outcome};

/// State changes the machine actor accepts.
#[derive(Debug, Clone)]
pub enum MachineCommand {
    Assign {
        machine_id: MachineId,
        order: Box<Order>,
        process: Box<Process>,
        operator: String,
    },
    Complete(MachineId),
    SetMaintenance(MachineId),
}

/// Results of [`MachineCommand`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum MachineActionResult {
    Assign(AssignOutcome),
    Complete(Outcome),
    SetMaintenance(Outcome),
}

#[derive(Debug, Clone)]
pub enum MachineQuery {
    All,
    Available,
    Find(MachineId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MachineView {
    Machines(Vec<Machine>),
    Machine(Option<Machine>),
}
