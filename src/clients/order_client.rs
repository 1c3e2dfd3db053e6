//! # Order Client
//!
//! High-level API for the order actor.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, StoreClient};
use crate::model::{AuditStatus, Order, OrderId};
use crate::order_store::{
    OrderActionResult, OrderCommand, OrderError, OrderQuery, OrderStore, OrderView,
};
use crate::outcome::{AuditOutcome, Outcome};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the order actor. Cheap to clone.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<OrderStore>,
}

#[async_trait]
impl ActorClient<OrderStore> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<OrderStore> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::ActorCommunicationError(e.to_string())
    }
}

impl OrderClient {
    pub fn new(inner: StoreClient<OrderStore>) -> Self {
        Self { inner }
    }

    /// Submits an order for review.
    #[instrument(skip(self, order), fields(order_id = %order.order_id))]
    pub async fn add_order(&self, order: Order) -> Result<(), OrderError> {
        debug!("Sending request");
        match self.execute(OrderCommand::Add(Box::new(order))).await? {
            OrderActionResult::Added => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn approve_order(&self, order_id: OrderId) -> Result<AuditOutcome, OrderError> {
        debug!("Sending request");
        self.audit(OrderCommand::Approve(order_id)).await
    }

    /// Rejects a pending order. `None` records the configured default reason.
    #[instrument(skip(self))]
    pub async fn reject_order(
        &self,
        order_id: OrderId,
        reason: Option<String>,
    ) -> Result<AuditOutcome, OrderError> {
        debug!("Sending request");
        self.audit(OrderCommand::Reject { order_id, reason }).await
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, order_id: OrderId) -> Result<Outcome, OrderError> {
        debug!("Sending request");
        match self.execute(OrderCommand::Delete(order_id)).await? {
            OrderActionResult::Delete(outcome) => Ok(outcome),
            other => Err(unexpected(other)),
        }
    }

    pub async fn pending_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.orders(OrderQuery::Pending).await
    }

    pub async fn approved_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.orders(OrderQuery::Approved).await
    }

    pub async fn rejected_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.orders(OrderQuery::Rejected).await
    }

    #[instrument(skip(self))]
    pub async fn find_order(&self, order_id: OrderId) -> Result<Option<Order>, OrderError> {
        match self.query(OrderQuery::Find(order_id)).await? {
            OrderView::Order(order) => Ok(order),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn audit_status_of(
        &self,
        order_id: OrderId,
    ) -> Result<Option<AuditStatus>, OrderError> {
        match self.query(OrderQuery::AuditStatus(order_id)).await? {
            OrderView::AuditStatus(status) => Ok(status),
            other => Err(unexpected(other)),
        }
    }

    async fn audit(&self, command: OrderCommand) -> Result<AuditOutcome, OrderError> {
        match self.execute(command).await? {
            OrderActionResult::Audit(outcome) => Ok(outcome),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    async fn orders(&self, query: OrderQuery) -> Result<Vec<Order>, OrderError> {
        match self.query(query).await? {
            OrderView::Orders(orders) => Ok(orders),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(reply: impl std::fmt::Debug) -> OrderError {
    OrderError::UnexpectedReply(format!("{reply:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_execute, MockClient};
    use chrono::NaiveDate;

    fn order(id: &str) -> Order {
        Order::new(id, "Acme", NaiveDate::from_ymd_opt(2026, 6, 30).unwrap())
    }

    #[tokio::test]
    async fn test_reject_sends_reason() {
        let (inner, mut receiver) = create_mock_client::<OrderStore>(4);
        let client = OrderClient::new(inner);

        let task = tokio::spawn(async move {
            client
                .reject_order("ORD-1".into(), Some("wrong material".to_string()))
                .await
        });

        let (command, responder) = expect_execute(&mut receiver)
            .await
            .expect("Expected Execute request");
        match command {
            OrderCommand::Reject { order_id, reason } => {
                assert_eq!(order_id, OrderId::from("ORD-1"));
                assert_eq!(reason.as_deref(), Some("wrong material"));
            }
            other => panic!("unexpected command {other:?}"),
        }
        responder
            .send(Ok(OrderActionResult::Audit(AuditOutcome::Applied)))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(AuditOutcome::Applied));
    }

    #[tokio::test]
    async fn test_outcomes_are_passed_through() {
        let mut mock = MockClient::<OrderStore>::new();
        mock.expect_execute()
            .return_ok(OrderActionResult::Audit(AuditOutcome::AlreadyDecided(
                AuditStatus::Rejected,
            )));
        mock.expect_execute()
            .return_ok(OrderActionResult::Delete(Outcome::NotFound));
        mock.expect_query()
            .return_ok(OrderView::Orders(vec![order("B"), order("A")]));

        let client = OrderClient::new(mock.client());
        assert_eq!(
            client.approve_order("ORD-1".into()).await,
            Ok(AuditOutcome::AlreadyDecided(AuditStatus::Rejected))
        );
        assert_eq!(client.delete_order("ORD-9".into()).await, Ok(Outcome::NotFound));

        let pending = client.pending_orders().await.unwrap();
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].order_id, OrderId::from("B"));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_reply_is_an_error() {
        let mut mock = MockClient::<OrderStore>::new();
        mock.expect_execute().return_ok(OrderActionResult::Added);
        mock.expect_query().return_ok(OrderView::Order(None));

        let client = OrderClient::new(mock.client());
        assert!(matches!(
            client.approve_order("ORD-1".into()).await,
            Err(OrderError::UnexpectedReply(_))
        ));
        assert!(matches!(
            client.pending_orders().await,
            Err(OrderError::UnexpectedReply(_))
        ));
    }

    #[tokio::test]
    async fn test_communication_failure_is_mapped() {
        let mut mock = MockClient::<OrderStore>::new();
        mock.expect_execute().return_err(FrameworkError::ActorClosed);

        let client = OrderClient::new(mock.client());
        let result = client.add_order(order("ORD-1")).await;
        assert_eq!(
            result,
            Err(OrderError::ActorCommunicationError("Actor closed".to_string()))
        );
    }
}
