//! Error types for the Settings actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SettingsError {
    /// The admin PIN did not match. Nothing was changed.
    #[error("Wrong PIN")]
    WrongPin,

    /// The settings document does not exist.
    #[error("Settings document not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
