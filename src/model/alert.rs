//! Alerts raised against a single process.
//!
//! An alert never goes away. Its status only moves forward:
//! `Active → Acknowledged → Resolved`, or straight from `Active` to `Resolved`.

use crate::model::{OrderId, ProcessId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Production is usually stopped.
    Critical,
    /// At risk, needs attention.
    Warn,
    Info,
}

impl Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertSeverity::Critical => write!(f, "critical"),
            AlertSeverity::Warn => write!(f, "warn"),
            AlertSeverity::Info => write!(f, "info"),
        }
    }
}

/// The monitoring rule that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// A key material is missing.
    MaterialMissing,
    /// Material ETA is later than the planned start.
    EtaSlip,
    /// Step did not start or finish on plan.
    StepDelay,
    OutsourceOverdue,
    DueDateRisk,
    ScheduleConflict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    #[default]
    Active,
    Acknowledged,
    Resolved,
}

impl Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertStatus::Active => write!(f, "active"),
            AlertStatus::Acknowledged => write!(f, "acknowledged"),
            AlertStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// Errors that can occur when advancing an alert.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AlertError {
    #[error("Invalid alert transition: {from} -> {to}")]
    InvalidTransition { from: AlertStatus, to: AlertStatus },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub order_id: OrderId,
    pub process_id: ProcessId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<AlertKind>,
    pub severity: AlertSeverity,
    pub reason: String,
    pub triggered_at: DateTime<Utc>,
    #[serde(default)]
    resolved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    status: AlertStatus,
}

impl Alert {
    /// Creates an active alert triggered now.
    pub fn new(
        order_id: impl Into<OrderId>,
        process_id: impl Into<ProcessId>,
        severity: AlertSeverity,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            process_id: process_id.into(),
            kind: None,
            severity,
            reason: reason.into(),
            triggered_at: Utc::now(),
            resolved_at: None,
            status: AlertStatus::Active,
        }
    }

    pub fn with_kind(mut self, kind: AlertKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn status(&self) -> AlertStatus {
        self.status
    }

    pub fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved_at
    }

    pub fn is_resolved(&self) -> bool {
        self.status == AlertStatus::Resolved
    }

    pub fn acknowledge(&mut self) -> Result<(), AlertError> {
        self.advance(AlertStatus::Acknowledged)
    }

    pub fn resolve(&mut self) -> Result<(), AlertError> {
        self.advance(AlertStatus::Resolved)?;
        self.resolved_at = Some(Utc::now());
        Ok(())
    }

    fn advance(&mut self, to: AlertStatus) -> Result<(), AlertError> {
        if to <= self.status {
            return Err(AlertError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert() -> Alert {
        Alert::new("ORD-1", "P-1", AlertSeverity::Critical, "bar stock missing")
            .with_kind(AlertKind::MaterialMissing)
    }

    #[test]
    fn test_forward_path() {
        let mut a = alert();
        assert_eq!(a.status(), AlertStatus::Active);

        a.acknowledge().unwrap();
        assert_eq!(a.status(), AlertStatus::Acknowledged);
        assert!(a.resolved_at().is_none());

        a.resolve().unwrap();
        assert!(a.is_resolved());
        assert!(a.resolved_at().is_some());
    }

    #[test]
    fn test_resolve_directly_from_active() {
        let mut a = alert();
        a.resolve().unwrap();
        assert_eq!(a.status(), AlertStatus::Resolved);
    }

    #[test]
    fn test_backwards_and_repeated_transitions_rejected() {
        let mut a = alert();
        a.resolve().unwrap();

        assert_eq!(
            a.acknowledge(),
            Err(AlertError::InvalidTransition {
                from: AlertStatus::Resolved,
                to: AlertStatus::Acknowledged,
            })
        );
        assert!(a.resolve().is_err());
        assert_eq!(a.status(), AlertStatus::Resolved);
    }
}
