//! # Order Store
//!
//! The audit lifecycle of orders: pending, approved and rejected pools and the
//! moves between them.
//!
//! ## Structure
//!
//! - [`store`] - [`OrderStore`], the state machine itself
//! - [`actions`] - [`OrderCommand`] / [`OrderQuery`] and their results
//! - [`entity`] - [`ActorStore`](crate::framework::ActorStore) implementation
//! - [`error`] - [`OrderError`] for the client side
//! - [`new()`] - Factory that wraps a store in an actor
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use order_tracker::clients::OrderClient;
//! use order_tracker::model::{AuditStatus, Order};
//! use order_tracker::order_store::{self, OrderStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = order_store::new(OrderStore::default(), 32);
//!     let orders = OrderClient::new(client);
//!     tokio::spawn(actor.run());
//!
//!     let deadline = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
//!     orders.add_order(Order::new("ORD-1", "Acme", deadline)).await?;
//!     assert!(orders.approve_order("ORD-1".into()).await?.is_applied());
//!     assert_eq!(orders.audit_status_of("ORD-1".into()).await?, Some(AuditStatus::Approved));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod store;

pub use actions::*;
pub use error::*;
pub use store::OrderStore;

use crate::framework::{StoreActor, StoreClient};

/// Wraps `store` in an actor with a request queue of `capacity`.
pub fn new(store: OrderStore, capacity: usize) -> (StoreActor<OrderStore>, StoreClient<OrderStore>) {
    StoreActor::new(store, capacity)
}
