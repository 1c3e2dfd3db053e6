//! # Clients
//!
//! Typed async front ends for the store actors. Each wraps a generic
//! [`StoreClient`](crate::framework::StoreClient), turns calls into commands or
//! queries, and unpacks the reply.

pub mod actor_client;
pub mod machine_client;
pub mod order_client;

pub use actor_client::*;
pub use machine_client::*;
pub use order_client::*;
