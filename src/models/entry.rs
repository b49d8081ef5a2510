//! Expense and income entries
//!
//! An entry is immutable once constructed; construction is the only place
//! its invariants are checked.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Which side of the ledger an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Expense,
    Income,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Expense => write!(f, "Expense"),
            EntryKind::Income => write!(f, "Income"),
        }
    }
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    NonPositiveAmount,
    BlankDescription,
    BlankCategory,
}

impl std::fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Entry amount must be positive"),
            Self::BlankDescription => write!(f, "Entry description cannot be blank"),
            Self::BlankCategory => write!(f, "Entry category cannot be blank"),
        }
    }
}

impl std::error::Error for EntryValidationError {}

/// A single recorded expense or income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    kind: EntryKind,
    description: String,
    amount: Money,
    category: String,
    date: NaiveDate,
}

impl Entry {
    /// Create an entry dated today
    ///
    /// Description and category are trimmed, and the category is upper-cased.
    /// Checks run in the order amount, description, category.
    pub fn new(
        kind: EntryKind,
        description: &str,
        amount: Money,
        category: &str,
    ) -> Result<Self, EntryValidationError> {
        Self::with_date(kind, description, amount, category, Local::now().date_naive())
    }

    /// Create an entry with an explicit date
    pub fn with_date(
        kind: EntryKind,
        description: &str,
        amount: Money,
        category: &str,
        date: NaiveDate,
    ) -> Result<Self, EntryValidationError> {
        if !amount.is_positive() {
            return Err(EntryValidationError::NonPositiveAmount);
        }

        let description = description.trim();
        if description.is_empty() {
            return Err(EntryValidationError::BlankDescription);
        }

        let category = category.trim().to_uppercase();
        if category.is_empty() {
            return Err(EntryValidationError::BlankCategory);
        }

        Ok(Self {
            kind,
            description: description.to_string(),
            amount,
            category,
            date,
        })
    }

    /// Shorthand for an expense dated today
    pub fn expense(
        description: &str,
        amount: Money,
        category: &str,
    ) -> Result<Self, EntryValidationError> {
        Self::new(EntryKind::Expense, description, amount, category)
    }

    /// Shorthand for an income dated today
    pub fn income(
        description: &str,
        amount: Money,
        category: &str,
    ) -> Result<Self, EntryValidationError> {
        Self::new(EntryKind::Income, description, amount, category)
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Whether the entry's date lies within `[start, end]`
    ///
    /// An inverted range contains nothing.
    pub fn is_dated_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }
}
