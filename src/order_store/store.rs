use crate::config::AuditLabels;
use crate::model::{AuditLog, AuditStatus, Order, OrderId};
use crate::outcome::{AuditOutcome, Outcome};
use chrono::Utc;
use tracing::{debug, info, warn};

/// The audit lifecycle of orders.
///
/// Orders live in three pools: `pending`, `approved` and `rejected`. Each pool
/// is kept most-recent-first. An order only moves out of `pending`; once it is
/// approved or rejected it stays where it is until deleted.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    pending: Vec<Order>,
    approved: Vec<Order>,
    rejected: Vec<Order>,
    labels: AuditLabels,
}

impl OrderStore {
    pub fn new(labels: AuditLabels) -> Self {
        Self {
            labels,
            ..Default::default()
        }
    }

    /// Submits an order for review, putting it at the front of the pending pool.
    ///
    /// The order's audit status is reset to pending; earlier audit log entries
    /// are kept. Duplicate ids are accepted.
    pub fn add_order(&mut self, mut order: Order) {
        if self.contains(&order.order_id) {
            warn!(order_id = %order.order_id, "Order id already tracked, keeping both");
        }
        order.mark_submitted();
        info!(order_id = %order.order_id, customer = %order.customer, "Order submitted");
        self.pending.insert(0, order);
    }

    /// Moves a pending order to the approved pool and logs the decision.
    pub fn approve_order(&mut self, order_id: &OrderId) -> AuditOutcome {
        let entry = AuditLog {
            time: Utc::now(),
            operator: self.labels.reviewer.clone(),
            action: self.labels.approve_action.clone(),
            comment: Some(self.labels.approve_comment.clone()),
        };
        self.decide(order_id, AuditStatus::Approved, entry)
    }

    /// Moves a pending order to the rejected pool and logs the decision.
    ///
    /// Without a `reason` the configured default is recorded as the comment.
    pub fn reject_order(&mut self, order_id: &OrderId, reason: Option<&str>) -> AuditOutcome {
        let comment = reason.unwrap_or(&self.labels.default_reject_reason).to_string();
        let entry = AuditLog {
            time: Utc::now(),
            operator: self.labels.reviewer.clone(),
            action: self.labels.reject_action.clone(),
            comment: Some(comment),
        };
        self.decide(order_id, AuditStatus::Rejected, entry)
    }

    /// Removes every order with this id from all three pools.
    pub fn delete_order(&mut self, order_id: &OrderId) -> Outcome {
        let before = self.len();
        for pool in [&mut self.pending, &mut self.approved, &mut self.rejected] {
            pool.retain(|o| &o.order_id != order_id);
        }
        let removed = before - self.len();

        if removed == 0 {
            debug!(%order_id, "Delete: not found");
            return Outcome::NotFound;
        }
        info!(%order_id, removed, "Order deleted");
        Outcome::Applied
    }

    pub fn pending_orders(&self) -> &[Order] {
        &self.pending
    }

    pub fn approved_orders(&self) -> &[Order] {
        &self.approved
    }

    pub fn rejected_orders(&self) -> &[Order] {
        &self.rejected
    }

    /// Looks the order up in pending, then approved, then rejected.
    pub fn find_order(&self, order_id: &OrderId) -> Option<&Order> {
        self.pending
            .iter()
            .chain(&self.approved)
            .chain(&self.rejected)
            .find(|o| &o.order_id == order_id)
    }

    /// Audit status as given by pool membership.
    pub fn audit_status_of(&self, order_id: &OrderId) -> Option<AuditStatus> {
        let in_pool = |pool: &[Order]| pool.iter().any(|o| &o.order_id == order_id);
        if in_pool(&self.pending) {
            Some(AuditStatus::Pending)
        } else if in_pool(&self.approved) {
            Some(AuditStatus::Approved)
        } else if in_pool(&self.rejected) {
            Some(AuditStatus::Rejected)
        } else {
            None
        }
    }

    /// Total number of orders across all pools.
    pub fn len(&self) -> usize {
        self.pending.len() + self.approved.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, order_id: &OrderId) -> bool {
        self.find_order(order_id).is_some()
    }

    fn decide(&mut self, order_id: &OrderId, status: AuditStatus, entry: AuditLog) -> AuditOutcome {
        let Some(pos) = self.pending.iter().position(|o| &o.order_id == order_id) else {
            return match self.audit_status_of(order_id) {
                Some(current) => {
                    debug!(%order_id, %current, requested = %status, "Already decided");
                    AuditOutcome::AlreadyDecided(current)
                }
                None => {
                    debug!(%order_id, requested = %status, "Audit: not found");
                    AuditOutcome::NotFound
                }
            };
        };

        let mut order = self.pending.remove(pos);
        order.record_decision(status, entry);
        info!(%order_id, %status, operator = %self.labels.reviewer, "Order reviewed");

        let target = match status {
            AuditStatus::Rejected => &mut self.rejected,
            _ => &mut self.approved,
        };
        target.insert(0, order);
        AuditOutcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(id: &str) -> Order {
        Order::new(id, "Acme", NaiveDate::from_ymd_opt(2026, 6, 30).unwrap())
    }

    fn store_with(ids: &[&str]) -> OrderStore {
        let mut store = OrderStore::default();
        for id in ids {
            store.add_order(order(id));
        }
        store
    }

    fn ids(pool: &[Order]) -> Vec<&str> {
        pool.iter().map(|o| o.order_id.0.as_str()).collect()
    }

    #[test]
    fn test_add_is_most_recent_first() {
        let store = store_with(&["A", "B"]);
        assert_eq!(ids(store.pending_orders()), vec!["B", "A"]);
        assert_eq!(store.audit_status_of(&"A".into()), Some(AuditStatus::Pending));
    }

    #[test]
    fn test_add_forces_pending_status() {
        let mut store = store_with(&["ORD-1"]);
        assert!(store.approve_order(&"ORD-1".into()).is_applied());
        let approved = store.find_order(&"ORD-1".into()).unwrap().clone();
        assert_eq!(approved.audit_status(), AuditStatus::Approved);

        let mut fresh = OrderStore::default();
        fresh.add_order(approved);
        let resubmitted = &fresh.pending_orders()[0];
        assert_eq!(resubmitted.audit_status(), AuditStatus::Pending);
        assert_eq!(resubmitted.audit_logs().len(), 1);
    }

    #[test]
    fn test_approve_moves_order_and_logs_once() {
        let mut store = store_with(&["ORD-1"]);

        assert_eq!(store.approve_order(&"ORD-1".into()), AuditOutcome::Applied);

        assert!(store.pending_orders().is_empty());
        assert_eq!(ids(store.approved_orders()), vec!["ORD-1"]);
        let approved = &store.approved_orders()[0];
        assert_eq!(approved.audit_status(), AuditStatus::Approved);
        assert_eq!(approved.audit_logs().len(), 1);
        assert_eq!(approved.audit_logs()[0].action, "approved");
        assert_eq!(approved.audit_logs()[0].operator, "reviewer");
        assert_eq!(
            approved.audit_logs()[0].comment.as_deref(),
            Some("meets production requirements")
        );
    }

    #[test]
    fn test_reject_uses_reason_or_default() {
        let mut store = store_with(&["A", "B"]);

        assert!(store.reject_order(&"A".into(), Some("missing drawings")).is_applied());
        assert!(store.reject_order(&"B".into(), None).is_applied());

        assert_eq!(ids(store.rejected_orders()), vec!["B", "A"]);
        let comment = |id: &str| {
            store.find_order(&id.into()).unwrap().audit_logs()[0]
                .comment
                .clone()
        };
        assert_eq!(comment("A").as_deref(), Some("missing drawings"));
        assert_eq!(comment("B").as_deref(), Some("does not meet requirements"));
        assert_eq!(
            store.find_order(&"A".into()).unwrap().audit_logs()[0].action,
            "rejected"
        );
    }

    #[test]
    fn test_decided_order_stays_put() {
        let mut store = store_with(&["ORD-1"]);
        assert!(store.approve_order(&"ORD-1".into()).is_applied());

        assert_eq!(
            store.reject_order(&"ORD-1".into(), None),
            AuditOutcome::AlreadyDecided(AuditStatus::Approved)
        );
        assert_eq!(
            store.approve_order(&"ORD-1".into()),
            AuditOutcome::AlreadyDecided(AuditStatus::Approved)
        );
        assert!(store.rejected_orders().is_empty());
        assert_eq!(store.approved_orders()[0].audit_logs().len(), 1);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut store = store_with(&["A"]);
        assert_eq!(store.approve_order(&"X".into()), AuditOutcome::NotFound);
        assert_eq!(store.reject_order(&"X".into(), None), AuditOutcome::NotFound);
        assert_eq!(store.delete_order(&"X".into()), Outcome::NotFound);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_pool_exclusivity() {
        let mut store = store_with(&["A", "B", "C"]);
        let _ = store.approve_order(&"A".into());
        let _ = store.reject_order(&"B".into(), None);

        for (id, expected) in [
            ("A", AuditStatus::Approved),
            ("B", AuditStatus::Rejected),
            ("C", AuditStatus::Pending),
        ] {
            let id = OrderId::from(id);
            let pools = [
                store.pending_orders(),
                store.approved_orders(),
                store.rejected_orders(),
            ];
            let hits: usize = pools
                .iter()
                .map(|pool| pool.iter().filter(|o| o.order_id == id).count())
                .sum();
            assert_eq!(hits, 1);
            assert_eq!(store.audit_status_of(&id), Some(expected));
            assert_eq!(store.find_order(&id).unwrap().audit_status(), expected);
        }
    }

    #[test]
    fn test_delete_is_idempotent_across_pools() {
        let mut store = store_with(&["A", "B"]);
        let _ = store.approve_order(&"A".into());

        assert_eq!(store.delete_order(&"A".into()), Outcome::Applied);
        assert_eq!(store.delete_order(&"A".into()), Outcome::NotFound);
        assert!(store.approved_orders().is_empty());
        assert_eq!(ids(store.pending_orders()), vec!["B"]);
        assert_eq!(store.audit_status_of(&"A".into()), None);
    }

    #[test]
    fn test_duplicate_ids_are_kept_and_deleted_together() {
        let mut store = store_with(&["A", "A"]);
        assert_eq!(store.pending_orders().len(), 2);

        assert!(store.approve_order(&"A".into()).is_applied());
        assert_eq!(store.pending_orders().len(), 1);
        assert_eq!(store.approved_orders().len(), 1);

        assert_eq!(store.delete_order(&"A".into()), Outcome::Applied);
        assert!(store.is_empty());
    }

    #[test]
    fn test_audit_log_only_grows() {
        let mut store = store_with(&["A"]);
        let _ = store.reject_order(&"A".into(), Some("first"));
        let first = store.find_order(&"A".into()).unwrap().audit_logs().to_vec();

        let mut resubmitted = store.find_order(&"A".into()).unwrap().clone();
        let _ = store.delete_order(&"A".into());
        resubmitted.remark = Some("drawings attached".to_string());
        store.add_order(resubmitted);
        let _ = store.approve_order(&"A".into());

        let logs = store.find_order(&"A".into()).unwrap().audit_logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0], first[0]);
        assert_eq!(logs[1].action, "approved");
    }

    #[test]
    fn test_custom_labels() {
        let labels = AuditLabels {
            reviewer: "QA lead".to_string(),
            approve_action: "released".to_string(),
            ..AuditLabels::default()
        };
        let mut store = OrderStore::new(labels);
        store.add_order(order("A"));
        let _ = store.approve_order(&"A".into());

        let log = &store.approved_orders()[0].audit_logs()[0];
        assert_eq!(log.operator, "QA lead");
        assert_eq!(log.action, "released");
    }
}
