use crate::model::{AuditStatus, Order, OrderId};
use crate::outcome::{AuditOutcome, Outcome};

/// State changes the order actor accepts.
#[derive(Debug, Clone)]
pub enum OrderCommand {
    Add(Box<Order>),
    Approve(OrderId),
    Reject {
        order_id: OrderId,
        reason: Option<String>,
    },
    Delete(OrderId),
}

/// Results of [`OrderCommand`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    Added,
    Audit(AuditOutcome),
    Delete(Outcome),
}

/// Reads against the order actor.
#[derive(Debug, Clone)]
pub enum OrderQuery {
    Pending,
    Approved,
    Rejected,
    Find(OrderId),
    AuditStatus(OrderId),
}

/// Copies of store state returned by [`OrderQuery`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderView {
    Orders(Vec<Order>),
    Order(Option<Order>),
    AuditStatus(Option<AuditStatus>),
}
