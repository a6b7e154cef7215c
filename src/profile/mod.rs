//! # Waiter Profile
//!
//! A waiter's name and the tables they serve. The profile lives on the waiter's
//! own device, not in the shared store, so it goes through a [`ProfileStore`]
//! rather than an actor.

pub mod store;

pub use store::*;

use crate::catalog::TableNumber;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Waiter name is missing")]
    MissingName,

    #[error("No tables assigned")]
    NoTables,

    #[error("Table {0} is outside 1..=44")]
    TableOutOfRange(u32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaiterProfile {
    pub name: String,
    pub tables: BTreeSet<TableNumber>,
}

impl WaiterProfile {
    /// A validated profile; the name is trimmed.
    pub fn new(
        name: &str,
        tables: impl IntoIterator<Item = u32>,
    ) -> Result<Self, ProfileError> {
        let mut profile = Self {
            name: name.trim().to_string(),
            tables: BTreeSet::new(),
        };
        for table in tables {
            profile.add_table(table)?;
        }
        profile.validate()?;
        Ok(profile)
    }

    /// Adds a table; `false` if it was already assigned.
    pub fn add_table(&mut self, number: u32) -> Result<bool, ProfileError> {
        let table = TableNumber::new(number).map_err(|e| ProfileError::TableOutOfRange(e.0))?;
        Ok(self.tables.insert(table))
    }

    pub fn remove_table(&mut self, table: TableNumber) -> bool {
        self.tables.remove(&table)
    }

    pub fn serves(&self, table: TableNumber) -> bool {
        self.tables.contains(&table)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::MissingName);
        }
        if self.tables.is_empty() {
            return Err(ProfileError::NoTables);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_required() {
        let profile = WaiterProfile::new("  Anna ", [3]).unwrap();
        assert_eq!(profile.name, "Anna");
        assert!(matches!(
            WaiterProfile::new("   ", [3]),
            Err(ProfileError::MissingName)
        ));
        assert!(matches!(
            WaiterProfile::new("Anna", []),
            Err(ProfileError::NoTables)
        ));
    }

    #[test]
    fn tables_are_sorted_and_unique() {
        let mut profile = WaiterProfile::new("Ben", [12, 3]).unwrap();
        assert!(!profile.add_table(3).unwrap());
        assert!(profile.add_table(44).unwrap());
        assert!(matches!(profile.add_table(45), Err(ProfileError::TableOutOfRange(45))));
        assert!(matches!(profile.add_table(0), Err(ProfileError::TableOutOfRange(0))));

        let numbers: Vec<u32> = profile.tables.iter().map(|t| t.get()).collect();
        assert_eq!(numbers, vec![3, 12, 44]);

        assert!(profile.remove_table(TableNumber::new(12).unwrap()));
        assert!(!profile.serves(TableNumber::new(12).unwrap()));
        assert!(profile.serves(TableNumber::new(3).unwrap()));
    }
}
