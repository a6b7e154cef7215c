//! Table numbers and their printed codes.
//!
//! Guests never see their table number in the URL; each table has a fixed code
//! (letter, two digits, letter) printed on its QR card.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of tables in the hall.
pub const TABLE_COUNT: u32 = 44;

const TABLE_CODES: [&str; TABLE_COUNT as usize] = [
    "K17A", "M23B", "R09C", "F31D", "P42E", "J15F", "W28G", "L06H", "T39I", "N21J", //
    "S12K", "B44L", "G35M", "D03N", "H26O", "V18P", "X41Q", "C08R", "Z33S", "A25T", //
    "E14U", "Y37V", "U02W", "Q29X", "I46Y", "O19Z", "K32A", "M05B", "R38C", "F11D", //
    "P24E", "J47F", "W16G", "L43H", "T07I", "N34J", "S22K", "B04L", "G27M", "D48N", //
    "H13O", "V36P", "X01Q", "C45R",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("table number {0} is outside 1..=44")]
pub struct TableOutOfRange(pub u32);

/// A table number in `1..=44`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TableNumber(u32);

impl TableNumber {
    pub fn new(number: u32) -> Result<Self, TableOutOfRange> {
        if (1..=TABLE_COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(TableOutOfRange(number))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Every table, in order.
    pub fn all() -> impl Iterator<Item = TableNumber> {
        (1..=TABLE_COUNT).map(TableNumber)
    }
}

impl TryFrom<u32> for TableNumber {
    type Error = TableOutOfRange;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<TableNumber> for u32 {
    fn from(table: TableNumber) -> Self {
        table.0
    }
}

impl Display for TableNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn table_code(table: TableNumber) -> &'static str {
    TABLE_CODES[(table.0 - 1) as usize]
}

/// Code for a raw number, `None` outside `1..=44`.
pub fn code_for(number: u32) -> Option<&'static str> {
    TableNumber::new(number).ok().map(table_code)
}

/// Resolves a printed code, ignoring case.
pub fn table_number(code: &str) -> Option<TableNumber> {
    TABLE_CODES
        .iter()
        .position(|known| known.eq_ignore_ascii_case(code))
        .map(|index| TableNumber(index as u32 + 1))
}

pub fn is_valid_table_code(code: &str) -> bool {
    table_number(code).is_some()
}

pub fn all_table_codes() -> impl Iterator<Item = (TableNumber, &'static str)> {
    TableNumber::all().map(|table| (table, table_code(table)))
}

/// Guest page URL printed on a table card.
pub fn table_url(base_url: &str, code: &str) -> String {
    format!("{}/tisch/{}", base_url.trim_end_matches('/'), code.to_ascii_uppercase())
}

/// Entry URL for waiters.
pub fn waiter_url(base_url: &str) -> String {
    format!("{}/kellner", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_table_round_trips_through_its_code() {
        for table in TableNumber::all() {
            assert_eq!(table_number(table_code(table)), Some(table));
        }
        let unique: HashSet<_> = TABLE_CODES.iter().collect();
        assert_eq!(unique.len(), TABLE_COUNT as usize);
    }

    #[test]
    fn known_pairs() {
        assert_eq!(code_for(1), Some("K17A"));
        assert_eq!(code_for(7), Some("W28G"));
        assert_eq!(code_for(27), Some("K32A"));
        assert_eq!(code_for(44), Some("C45R"));
        assert_eq!(code_for(0), None);
        assert_eq!(code_for(45), None);
    }

    #[test]
    fn codes_are_case_insensitive() {
        assert_eq!(table_number("w28g").map(TableNumber::get), Some(7));
        assert!(is_valid_table_code("c45r"));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for code in ["", "W28", "W28GG", "A00A", "K17A ", "tisch"] {
            assert!(!is_valid_table_code(code), "{code:?} should be invalid");
        }
    }

    #[test]
    fn table_numbers_are_range_checked() {
        assert_eq!(TableNumber::new(0), Err(TableOutOfRange(0)));
        assert!(TableNumber::new(44).is_ok());
        assert!(serde_json::from_str::<TableNumber>("45").is_err());
        assert_eq!(serde_json::from_str::<TableNumber>("12").unwrap().get(), 12);
    }

    #[test]
    fn urls() {
        assert_eq!(
            table_url("https://karneval.example/", "w28g"),
            "https://karneval.example/tisch/W28G"
        );
        assert_eq!(waiter_url("http://localhost:3000"), "http://localhost:3000/kellner");
        assert_eq!(all_table_codes().count(), 44);
    }
}
