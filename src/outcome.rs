//! Explicit results of store operations.
//!
//! Looking up an unknown id is not an error in this system, but callers still
//! need to tell "applied" from "nothing happened". Every store operation
//! returns one of these values instead of silently doing nothing.

use crate::model::{AuditStatus, CurrentWork};

/// Result of a find-then-mutate operation.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    NotFound,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Result of approving or rejecting an order.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    /// The order moved out of the pending pool.
    Applied,
    /// The order was already reviewed; it stays where it is.
    AlreadyDecided(AuditStatus),
    NotFound,
}

impl AuditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, AuditOutcome::Applied)
    }
}

/// Result of assigning work to a machine.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum AssignOutcome {
    /// The machine had no current work.
    Assigned,
    /// The machine was already running something; it has been replaced.
    Overwritten(Box<CurrentWork>),
    NotFound,
}

impl AssignOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, AssignOutcome::NotFound)
    }
}
