//! # Settings Actor
//!
//! Owns the `system` document with the two bar switches (emergency stop and
//! order-form lock). Every table page and the bar observe it live.
//!
//! The PIN is checked by [`SettingsClient`](crate::clients::SettingsClient)
//! before any request reaches this actor.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::SystemSettings;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Settings actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<SystemSettings>, ResourceClient<SystemSettings>) {
    ResourceActor::new(buffer_size)
}
