//! Static reference data: the drinks menu and the table code sheet.

pub mod menu;
pub mod tables;

pub use menu::*;
pub use tables::*;
