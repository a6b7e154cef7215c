//! # Statistics Actor
//!
//! Owns the single `statistics` document and is its only writer.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Statistics`]
//! - [`error`] - [`StatisticsError`]
//! - [`actions`] - [`StatisticsAction`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Why an actor
//!
//! Every dismissal increments several counters in the same document. Because the
//! increments arrive as [`StatisticsAction::Record`] messages and the actor handles
//! one message at a time, two dismissals can never read the same old totals.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Statistics;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Statistics actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Statistics>, ResourceClient<Statistics>) {
    ResourceActor::new(buffer_size)
}
