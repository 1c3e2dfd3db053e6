//! # Store Actor Framework
//!
//! Runs a single in-memory store inside its own Tokio task and hands out a
//! cloneable client for it.
//!
//! A store implements [`ActorStore`]: a synchronous `execute` for state changes
//! and a read-only `query`. [`StoreActor`] owns the store and processes one
//! request at a time, so two clients racing on the same order or machine are
//! simply applied in arrival order. No locks are involved.
//!
//! ```rust
//! use order_tracker::framework::{ActorStore, StoreActor};
//!
//! #[derive(Default)]
//! struct Counter(u32);
//!
//! impl ActorStore for Counter {
//!     type Command = u32;
//!     type Outcome = u32;
//!     type Query = ();
//!     type View = u32;
//!
//!     fn execute(&mut self, add: u32) -> u32 {
//!         self.0 += add;
//!         self.0
//!     }
//!
//!     fn query(&self, _: ()) -> u32 {
//!         self.0
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::new(Counter::default(), 8);
//!     tokio::spawn(actor.run());
//!
//!     client.execute(2).await.unwrap();
//!     assert_eq!(client.query(()).await.unwrap(), 2);
//! }
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::FrameworkError;
pub use message::{Response, StoreRequest};
pub use store::ActorStore;
