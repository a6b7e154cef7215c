//! # Documents
//!
//! Plain data stored by the actors. Field names serialise in camelCase to match
//! the shared store layout (`tableNumber`, `orderedBy`, `itemTotals`, ...).

pub mod order;
pub mod settings;
pub mod statistics;

pub use order::*;
pub use settings::*;
pub use statistics::*;

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a singleton document (statistics, system settings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub u32);

impl From<u32> for DocumentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "doc_{}", self.0)
    }
}
