//! Error types for the Order actor.

use crate::statistics_actor::StatisticsError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found (already dismissed, or never existed).
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Nothing in the basket.
    #[error("Order contains no items")]
    EmptyOrder,

    /// The basket references an item that is not on the menu.
    #[error("Unknown menu item: {0}")]
    UnknownMenuItem(String),

    /// The table code does not belong to any table.
    #[error("Unknown table code: {0}")]
    UnknownTable(String),

    #[error("Invalid table number: {0}")]
    InvalidTable(u32),

    /// The bar pulled the emergency stop.
    #[error("Service is stopped")]
    ServiceStopped,

    /// Only waiter calls are accepted right now.
    #[error("Order form is locked")]
    OrderFormLocked,

    /// Recording a dismissed order failed; the order was kept.
    #[error("Statistics error: {0}")]
    Statistics(#[from] StatisticsError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
