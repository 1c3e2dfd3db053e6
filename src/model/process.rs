use crate::model::Alert;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Process identifier, unique within its parent order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessId(pub String);

impl From<&str> for ProcessId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProcessId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProcessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStage {
    #[default]
    NotStarted,
    InProgress,
    /// Paused until an alert is handled.
    Blocked,
    Done,
}

impl Display for ProcessStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessStage::NotStarted => write!(f, "not_started"),
            ProcessStage::InProgress => write!(f, "in_progress"),
            ProcessStage::Blocked => write!(f, "blocked"),
            ProcessStage::Done => write!(f, "done"),
        }
    }
}

/// One line of the production log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessLog {
    pub time: DateTime<Utc>,
    pub action: String,
    pub operator: String,
}

/// A single production step (sub-task) of an [`Order`](crate::model::Order).
///
/// Processes are embedded in their order. When a machine picks one up, the
/// [`MachineStore`](crate::machine_store::MachineStore) keeps its own copy, so the
/// two never alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    pub id: ProcessId,
    pub name: String,
    /// Person responsible for the step.
    pub owner: String,
    /// Material the step consumes.
    pub input: String,
    /// What the step produces.
    pub output: String,
    #[serde(default)]
    pub planned_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub planned_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub actual_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub actual_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stage: ProcessStage,
    #[serde(default)]
    alerts: Vec<Alert>,
    #[serde(default)]
    logs: Vec<ProcessLog>,
}

impl Process {
    pub fn new(
        id: impl Into<ProcessId>,
        name: impl Into<String>,
        owner: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner: owner.into(),
            input: input.into(),
            output: output.into(),
            planned_start: None,
            planned_end: None,
            actual_start: None,
            actual_end: None,
            stage: ProcessStage::NotStarted,
            alerts: Vec::new(),
            logs: Vec::new(),
        }
    }

    pub fn with_plan(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.planned_start = Some(start);
        self.planned_end = Some(end);
        self
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn alerts_mut(&mut self) -> impl Iterator<Item = &mut Alert> {
        self.alerts.iter_mut()
    }

    pub fn logs(&self) -> &[ProcessLog] {
        &self.logs
    }

    /// Appends a production log entry.
    pub fn record(&mut self, action: impl Into<String>, operator: impl Into<String>) {
        self.logs.push(ProcessLog {
            time: Utc::now(),
            action: action.into(),
            operator: operator.into(),
        });
    }

    pub fn start(&mut self, operator: impl Into<String>) {
        self.stage = ProcessStage::InProgress;
        self.actual_start = Some(Utc::now());
        self.record("started", operator);
    }

    pub fn block(&mut self, operator: impl Into<String>) {
        self.stage = ProcessStage::Blocked;
        self.record("blocked", operator);
    }

    pub fn complete(&mut self, operator: impl Into<String>) {
        self.stage = ProcessStage::Done;
        self.actual_end = Some(Utc::now());
        self.record("completed", operator);
    }

    /// Alerts are only ever added; their status moves forward in place.
    pub fn attach_alert(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    /// True if any attached alert is still unresolved.
    pub fn has_open_alerts(&self) -> bool {
        self.alerts.iter().any(|a| !a.is_resolved())
    }
}
