use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur while talking to the machine actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),

    #[error("Unexpected reply from machine actor: {0}")]
    UnexpectedReply(String),
}

impl From<FrameworkError> for MachineError {
    fn from(err: FrameworkError) -> Self {
        MachineError::ActorCommunicationError(err.to_string())
    }
}
