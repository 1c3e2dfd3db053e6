use crate::model::{Order, Process};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Type-safe identifier for Machines (e.g. `M-CNC-01`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MachineId(pub String);

impl From<&str> for MachineId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MachineId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for MachineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MachineStatus {
    #[default]
    Idle,
    Busy,
    Damaged,
    OnRepair,
}

impl Display for MachineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineStatus::Idle => write!(f, "idle"),
            MachineStatus::Busy => write!(f, "busy"),
            MachineStatus::Damaged => write!(f, "damaged"),
            MachineStatus::OnRepair => write!(f, "on_repair"),
        }
    }
}

/// The order and process a machine is executing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWork {
    pub order: Order,
    pub process: Process,
}

/// One assignment record, holding independent snapshots of its contexts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineLog {
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub order_context: Order,
    pub sub_task_context: Process,
    pub operator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Represents a production resource on the shop floor.
///
/// # Current Work
/// A busy machine carries the order and process it is running as one
/// [`CurrentWork`] pair, so "order without process" cannot be represented.
///
/// # History
/// Every assignment pushes a [`MachineLog`] to the head of `task_history`.
/// Each entry owns its own copy of the order and process taken at assignment
/// time; later changes to the live order never reach it.
///
/// Deserialized machines are checked: a busy machine must carry its work and
/// an idle one must not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MachineRecord")]
pub struct Machine {
    pub id: MachineId,
    pub name: String,
    /// e.g. machining, sheet metal, assembly
    pub category: String,
    status: MachineStatus,
    current: Option<CurrentWork>,
    task_history: Vec<MachineLog>,
}

/// Serialized form of [`Machine`] before the status/work pairing is checked.
#[derive(Deserialize)]
struct MachineRecord {
    id: MachineId,
    name: String,
    category: String,
    #[serde(default)]
    status: MachineStatus,
    #[serde(default)]
    current: Option<CurrentWork>,
    #[serde(default)]
    task_history: Vec<MachineLog>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineStateError {
    #[error("machine {0} is busy but has no current work")]
    BusyWithoutWork(MachineId),
    #[error("machine {0} is idle but still has current work")]
    IdleWithWork(MachineId),
}

impl TryFrom<MachineRecord> for Machine {
    type Error = MachineStateError;

    fn try_from(record: MachineRecord) -> Result<Self, Self::Error> {
        match (record.status, &record.current) {
            (MachineStatus::Busy, None) => {
                return Err(MachineStateError::BusyWithoutWork(record.id))
            }
            (MachineStatus::Idle, Some(_)) => {
                return Err(MachineStateError::IdleWithWork(record.id))
            }
            _ => {}
        }
        Ok(Self {
            id: record.id,
            name: record.name,
            category: record.category,
            status: record.status,
            current: record.current,
            task_history: record.task_history,
        })
    }
}

impl Machine {
    /// Creates an idle Machine with an empty history.
    pub fn new(
        id: impl Into<MachineId>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            status: MachineStatus::Idle,
            current: None,
            task_history: Vec::new(),
        }
    }

    pub fn status(&self) -> MachineStatus {
        self.status
    }

    pub fn current_work(&self) -> Option<&CurrentWork> {
        self.current.as_ref()
    }

    pub fn current_order(&self) -> Option<&Order> {
        self.current.as_ref().map(|w| &w.order)
    }

    pub fn current_sub_task(&self) -> Option<&Process> {
        self.current.as_ref().map(|w| &w.process)
    }

    /// Most recent assignment first.
    pub fn task_history(&self) -> &[MachineLog] {
        &self.task_history
    }

    pub fn is_available(&self) -> bool {
        self.status == MachineStatus::Idle
    }

    /// Makes the machine busy with `work`, returning whatever it was running before.
    pub(crate) fn begin(&mut self, work: CurrentWork, log: MachineLog) -> Option<CurrentWork> {
        self.status = MachineStatus::Busy;
        self.task_history.insert(0, log);
        self.current.replace(work)
    }

    pub(crate) fn release(&mut self) {
        self.status = MachineStatus::Idle;
        self.current = None;
    }

    /// Puts the machine under repair. Current work is kept unless `clear_work` is set.
    pub(crate) fn send_to_repair(&mut self, clear_work: bool) {
        self.status = MachineStatus::OnRepair;
        if clear_work {
            self.current = None;
        }
    }
}
