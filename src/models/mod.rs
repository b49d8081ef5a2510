//! Core data models for Tally
//!
//! Money amounts and the expense/income entries recorded in the ledger.

pub mod entry;
pub mod money;

pub use entry::{Entry, EntryKind, EntryValidationError};
pub use money::{Money, MoneyParseError};
