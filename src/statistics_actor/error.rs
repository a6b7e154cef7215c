//! Error types for the Statistics actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StatisticsError {
    /// The statistics document does not exist.
    #[error("Statistics document not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
