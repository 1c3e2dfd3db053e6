//! Lets [`OrderStore`] run inside a [`StoreActor`](crate::framework::StoreActor).

use super::actions::{OrderActionResult, OrderCommand, OrderQuery, OrderView};
use super::store::OrderStore;
use crate::framework::ActorStore;

impl ActorStore for OrderStore {
    type Command = OrderCommand;
    type Outcome = OrderActionResult;
    type Query = OrderQuery;
    type View = OrderView;

    fn execute(&mut self, command: OrderCommand) -> OrderActionResult {
        match command {
            OrderCommand::Add(order) => {
                self.add_order(*order);
                OrderActionResult::Added
            }
            OrderCommand::Approve(order_id) => {
                OrderActionResult::Audit(self.approve_order(&order_id))
            }
            OrderCommand::Reject { order_id, reason } => {
                OrderActionResult::Audit(self.reject_order(&order_id, reason.as_deref()))
            }
            OrderCommand::Delete(order_id) => OrderActionResult::Delete(self.delete_order(&order_id)),
        }
    }

    fn query(&self, query: OrderQuery) -> OrderView {
        match query {
            OrderQuery::Pending => OrderView::Orders(self.pending_orders().to_vec()),
            OrderQuery::Approved => OrderView::Orders(self.approved_orders().to_vec()),
            OrderQuery::Rejected => OrderView::Orders(self.rejected_orders().to_vec()),
            OrderQuery::Find(order_id) => OrderView::Order(self.find_order(&order_id).cloned()),
            OrderQuery::AuditStatus(order_id) => {
                OrderView::AuditStatus(self.audit_status_of(&order_id))
            }
        }
    }
}
