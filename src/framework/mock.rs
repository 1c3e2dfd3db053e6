//! # Mocking Utilities
//!
//! Test client code without spawning a real store actor.
//!
//! | | `MockClient` | Real actor |
//! |---|---|---|
//! | **State** | None, answers are scripted | Real store |
//! | **Error injection** | `return_err` | Hard |
//! | **Use case** | Logic *around* a client | The store itself, full system |
//!
//! Two styles are available:
//!
//! - [`create_mock_client`] hands back the client and the raw request receiver.
//!   Pull requests off with [`expect_execute`] / [`expect_query`], inspect them,
//!   and answer on the returned responder.
//! - [`MockClient`] queues scripted answers up front and replies to requests in
//!   order.
//!
//! ```rust
//! use order_tracker::framework::mock::MockClient;
//! use order_tracker::framework::{ActorStore, FrameworkError};
//!
//! struct Switch(bool);
//!
//! impl ActorStore for Switch {
//!     type Command = bool;
//!     type Outcome = bool;
//!     type Query = ();
//!     type View = bool;
//!     fn execute(&mut self, on: bool) -> bool { std::mem::replace(&mut self.0, on) }
//!     fn query(&self, _: ()) -> bool { self.0 }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Switch>::new();
//!     mock.expect_query().return_ok(true);
//!     mock.expect_execute().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.query(()).await.unwrap());
//!     assert!(matches!(client.execute(false).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use super::client::StoreClient;
use super::error::FrameworkError;
use super::message::{Response, StoreRequest};
use super::store::ActorStore;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

type Expectations<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A scripted answer for the next request.
enum Expectation<S: ActorStore> {
    Execute {
        response: Result<S::Outcome, FrameworkError>,
    },
    Query {
        response: Result<S::View, FrameworkError>,
    },
}

/// A mock client that answers requests from a queue of expectations.
///
/// Expectations are consumed in the order they were registered. A request that
/// does not match the next expectation panics the mock task, which surfaces to
/// the caller as [`FrameworkError::ActorDropped`].
pub struct MockClient<S: ActorStore> {
    client: StoreClient<S>,
    expectations: Expectations<S>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ActorStore> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ActorStore> MockClient<S> {
    /// Creates a mock client with no expectations. Must be called inside a
    /// Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<S>>(100);
        let expectations: Expectations<S> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Execute { respond_to, .. },
                        Some(Expectation::Execute { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Query { respond_to, .. }, Some(Expectation::Query { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    pub fn client(&self) -> StoreClient<S> {
        self.client.clone()
    }

    /// Expects a command.
    pub fn expect_execute(&mut self) -> ExecuteExpectationBuilder<S> {
        ExecuteExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a query.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<S> {
        QueryExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

pub struct ExecuteExpectationBuilder<S: ActorStore> {
    expectations: Expectations<S>,
}

impl<S: ActorStore> ExecuteExpectationBuilder<S> {
    pub fn return_ok(self, outcome: S::Outcome) {
        self.push(Ok(outcome));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<S::Outcome, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Execute { response });
    }
}

pub struct QueryExpectationBuilder<S: ActorStore> {
    expectations: Expectations<S>,
}

impl<S: ActorStore> QueryExpectationBuilder<S> {
    pub fn return_ok(self, view: S::View) {
        self.push(Ok(view));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<S::View, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Query { response });
    }
}

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client<S: ActorStore>(
    buffer_size: usize,
) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a command.
pub async fn expect_execute<S: ActorStore>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(S::Command, Response<S::Outcome>)> {
    match receiver.recv().await {
        Some(StoreRequest::Execute {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a query.
pub async fn expect_query<S: ActorStore>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(S::Query, Response<S::View>)> {
    match receiver.recv().await {
        Some(StoreRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}
