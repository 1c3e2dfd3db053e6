use crate::model::{Process, ProcessId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders (e.g. `ORD-2026-001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse production state of the whole order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStage {
    /// Waiting for review.
    #[default]
    Audit,
    /// Running normally on the shop floor.
    OnGoing,
    /// Paused on an unresolved alert.
    Alert,
    Completed,
}

impl Display for OrderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStage::Audit => write!(f, "audit"),
            OrderStage::OnGoing => write!(f, "ongoing"),
            OrderStage::Alert => write!(f, "alert"),
            OrderStage::Completed => write!(f, "completed"),
        }
    }
}

/// Order priority, shared with follow-up todos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Normal,
    Low,
}

impl Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Critical => write!(f, "critical"),
            Priority::High => write!(f, "high"),
            Priority::Normal => write!(f, "normal"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Review outcome of an order. Mirrors the pool the order lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    /// Submitted, waiting for a reviewer.
    #[default]
    Pending,
    /// Accepted into production tracking.
    Approved,
    /// Sent back; must be changed and resubmitted.
    Rejected,
}

impl Display for AuditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditStatus::Pending => write!(f, "pending"),
            AuditStatus::Approved => write!(f, "approved"),
            AuditStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// One entry of the review trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub time: DateTime<Utc>,
    pub operator: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A product line on the order (one order can carry several products).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductItem {
    pub name: String,
    pub quantity: u32,
    /// e.g. `pcs`, `kg`, `set`
    pub unit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentCategory {
    OrderInfo,
    Packaging,
    ProductCard,
    Delivery,
    Others,
}

/// A document uploaded alongside the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub category: AttachmentCategory,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Represents a customer production order.
///
/// # Audit Lifecycle
/// An order is owned by exactly one pool of the [`OrderStore`](crate::order_store::OrderStore)
/// at a time. Only the store changes [`Order::audit_status`] and it does so in the
/// same step that moves the order between pools, so the status always mirrors
/// pool membership.
///
/// The audit trail is append-only: entries can be read through
/// [`Order::audit_logs`] but never edited or reordered from outside the crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub customer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_tag: Option<String>,
    /// Promised delivery date.
    pub deadline: NaiveDate,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Process plan suggested when the order was submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_task: Option<String>,
    #[serde(default)]
    pub products: Vec<ProductItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    /// Raw materials the order needs.
    #[serde(default)]
    pub bom_requirement: Vec<String>,
    /// Production steps, in execution order.
    #[serde(default)]
    pub sub_tasks: Vec<Process>,
    #[serde(default)]
    pub stage: OrderStage,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    audit_status: AuditStatus,
    #[serde(default)]
    audit_logs: Vec<AuditLog>,
}

impl Order {
    /// Creates a new pending Order with no processes.
    ///
    /// # Arguments
    /// * `order_id` - Unique order number
    /// * `customer` - Customer name
    /// * `deadline` - Promised delivery date
    pub fn new(
        order_id: impl Into<OrderId>,
        customer: impl Into<String>,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            customer: customer.into(),
            version_tag: None,
            deadline,
            attachments: Vec::new(),
            proposed_task: None,
            products: Vec::new(),
            remark: None,
            bom_requirement: Vec::new(),
            sub_tasks: Vec::new(),
            stage: OrderStage::Audit,
            priority: Priority::Normal,
            audit_status: AuditStatus::Pending,
            audit_logs: Vec::new(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_product(mut self, item: ProductItem) -> Self {
        self.products.push(item);
        self
    }

    /// Appends a production step to the end of the routing.
    pub fn with_process(mut self, process: Process) -> Self {
        self.sub_tasks.push(process);
        self
    }

    pub fn audit_status(&self) -> AuditStatus {
        self.audit_status
    }

    pub fn audit_logs(&self) -> &[AuditLog] {
        &self.audit_logs
    }

    pub fn process(&self, id: &ProcessId) -> Option<&Process> {
        self.sub_tasks.iter().find(|p| &p.id == id)
    }

    pub fn process_mut(&mut self, id: &ProcessId) -> Option<&mut Process> {
        self.sub_tasks.iter_mut().find(|p| &p.id == id)
    }

    /// Resets the review state for a fresh submission. Earlier log entries are kept.
    pub(crate) fn mark_submitted(&mut self) {
        self.audit_status = AuditStatus::Pending;
    }

    /// Records a review decision: sets the status and appends one log entry.
    pub(crate) fn record_decision(&mut self, status: AuditStatus, entry: AuditLog) {
        self.audit_status = status;
        self.audit_logs.push(entry);
    }
}
