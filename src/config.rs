//! Configuration for the tracker.
//!
//! Loaded from TOML. Every section is optional; anything left out falls back to
//! the defaults below, and a file with no `[[machines]]` gets the standard
//! four-station fleet.
//!
//! ```toml
//! [audit]
//! reviewer = "QA lead"
//!
//! [dispatch]
//! clear_work_on_maintenance = true
//!
//! [[machines]]
//! id = "M-CNC-01"
//! name = "CNC mill #1"
//! category = "machining"
//! ```

use crate::model::{Machine, MachineId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.message().to_string())
    }
}

/// Labels written into the audit trail by the order store.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AuditLabels {
    /// Operator recorded on every review decision.
    pub reviewer: String,
    pub approve_action: String,
    pub approve_comment: String,
    pub reject_action: String,
    /// Comment used when a rejection gives no reason.
    pub default_reject_reason: String,
}

impl Default for AuditLabels {
    fn default() -> Self {
        Self {
            reviewer: "reviewer".to_string(),
            approve_action: "approved".to_string(),
            approve_comment: "meets production requirements".to_string(),
            reject_action: "rejected".to_string(),
            default_reject_reason: "does not meet requirements".to_string(),
        }
    }
}

/// How the machine store handles assignments and maintenance.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DispatchPolicy {
    /// Action recorded on each history entry.
    pub assign_action: String,
    /// Drop the current order/process when a machine goes under repair.
    pub clear_work_on_maintenance: bool,
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        Self {
            assign_action: "assigned".to_string(),
            clear_work_on_maintenance: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Request queue size of each store actor.
    pub channel_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
        }
    }
}

/// A machine entry in the fleet list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MachineSpec {
    pub id: String,
    pub name: String,
    pub category: String,
}

impl MachineSpec {
    pub fn to_machine(&self) -> Machine {
        Machine::new(MachineId(self.id.clone()), self.name.clone(), self.category.clone())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub audit: AuditLabels,
    pub dispatch: DispatchPolicy,
    pub runtime: RuntimeConfig,
    pub machines: Vec<MachineSpec>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            audit: AuditLabels::default(),
            dispatch: DispatchPolicy::default(),
            runtime: RuntimeConfig::default(),
            machines: default_fleet(),
        }
    }
}

/// The standard shop: two CNC mills, a laser cutter and a manual assembly bench.
pub fn default_fleet() -> Vec<MachineSpec> {
    let spec = |id: &str, name: &str, category: &str| MachineSpec {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
    };
    vec![
        spec("M-CNC-01", "CNC mill #1", "machining"),
        spec("M-CNC-02", "CNC mill #2", "machining"),
        spec("M-LSR-01", "Laser cutter", "sheet metal"),
        spec("M-ASS-01", "Manual assembly bench", "assembly"),
    ]
}

impl TrackerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let mut config: TrackerConfig = toml::from_str(input)?;
        if config.machines.is_empty() {
            config.machines = default_fleet();
        }
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runtime.channel_capacity == 0 {
            return Err(ConfigError::Validation(
                "runtime.channel_capacity must be greater than zero".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for spec in &self.machines {
            if spec.id.trim().is_empty() {
                return Err(ConfigError::Validation("machine id cannot be empty".to_string()));
            }
            if !seen.insert(spec.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate machine id: {}",
                    spec.id
                )));
            }
        }
        Ok(())
    }

    pub fn fleet(&self) -> Vec<Machine> {
        self.machines.iter().map(MachineSpec::to_machine).collect()
    }
}
