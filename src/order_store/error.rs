//! Error types for the order client.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur while talking to the order actor.
///
/// Unknown ids are not errors; they come back as `NotFound` outcomes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),

    /// The actor answered with a result meant for a different request.
    #[error("Unexpected reply from order actor: {0}")]
    UnexpectedReply(String),
}

impl From<FrameworkError> for OrderError {
    fn from(err: FrameworkError) -> Self {
        OrderError::ActorCommunicationError(err.to_string())
    }
}
