//! In-memory ledger of expenses and income
//!
//! Entries are kept in insertion order. Positions handed to and from users
//! are one-based; removing an entry shifts everything after it down by one.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{TallyError, TallyResult};
use crate::models::{Entry, EntryKind, Money};

/// Ordered collections of expenses and income for one session
#[derive(Debug, Default)]
pub struct Ledger {
    expenses: Vec<Entry>,
    incomes: Vec<Entry>,
    audit: Option<AuditLogger>,
}

impl Ledger {
    /// Create an empty ledger that records nothing to an audit log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger that appends every change to `logger`
    pub fn with_audit(logger: AuditLogger) -> Self {
        Self {
            audit: Some(logger),
            ..Self::default()
        }
    }

    /// Append an entry to the list matching its kind
    pub fn add(&mut self, entry: Entry) {
        let kind = entry.kind();
        let list = self.entries_mut(kind);
        list.push(entry);
        let index = list.len();
        debug!(%kind, index, "entry added");

        if let Some(entry) = self.entries(kind).last() {
            self.audit(|| AuditEntry::create(entry, index));
        }
    }

    /// Remove the expense at a one-based index
    ///
    /// # Errors
    ///
    /// Returns `TallyError::NotFound` if the index is outside `[1, len]`.
    pub fn remove_expense(&mut self, index: usize) -> TallyResult<Entry> {
        self.remove(EntryKind::Expense, index)
            .ok_or_else(|| TallyError::expense_not_found(index))
    }

    /// Remove the income at a one-based index
    ///
    /// # Errors
    ///
    /// Returns `TallyError::NotFound` if the index is outside `[1, len]`.
    pub fn remove_income(&mut self, index: usize) -> TallyResult<Entry> {
        self.remove(EntryKind::Income, index)
            .ok_or_else(|| TallyError::income_not_found(index))
    }

    pub fn expenses(&self) -> &[Entry] {
        &self.expenses
    }

    pub fn incomes(&self) -> &[Entry] {
        &self.incomes
    }

    /// Entries of one kind, in insertion order
    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Expense => &self.expenses,
            EntryKind::Income => &self.incomes,
        }
    }

    /// Sum of all expenses
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Overflow` if the sum does not fit in `Money`.
    pub fn total_expense(&self) -> TallyResult<Money> {
        self.total(EntryKind::Expense)
    }

    pub fn total_income(&self) -> TallyResult<Money> {
        self.total(EntryKind::Income)
    }

    /// Sum of expenses dated within `[start, end]`
    pub fn total_expense_between(&self, start: NaiveDate, end: NaiveDate) -> TallyResult<Money> {
        self.total_between(EntryKind::Expense, start, end)
    }

    /// Sum of income dated within `[start, end]`
    pub fn total_income_between(&self, start: NaiveDate, end: NaiveDate) -> TallyResult<Money> {
        self.total_between(EntryKind::Income, start, end)
    }

    /// Sum of all entries of one kind; zero when there are none
    pub fn total(&self, kind: EntryKind) -> TallyResult<Money> {
        Money::checked_sum(self.entries(kind).iter().map(Entry::amount))
            .ok_or(TallyError::Overflow(kind))
    }

    /// Sum of entries of one kind dated within `[start, end]`
    ///
    /// No ordering is required of the bounds. When `start > end` no date can
    /// satisfy both, so the total is zero.
    pub fn total_between(
        &self,
        kind: EntryKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> TallyResult<Money> {
        let amounts = self
            .entries(kind)
            .iter()
            .filter(|e| e.is_dated_between(start, end))
            .map(Entry::amount);
        Money::checked_sum(amounts).ok_or(TallyError::Overflow(kind))
    }

    fn entries_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Expense => &mut self.expenses,
            EntryKind::Income => &mut self.incomes,
        }
    }

    fn remove(&mut self, kind: EntryKind, index: usize) -> Option<Entry> {
        let list = self.entries_mut(kind);
        if index == 0 || index > list.len() {
            debug!(%kind, index, len = list.len(), "remove index out of range");
            return None;
        }

        let removed = list.remove(index - 1);
        debug!(%kind, index, "entry removed");
        self.audit(|| AuditEntry::delete(&removed, index));
        Some(removed)
    }

    fn audit(&self, record: impl FnOnce() -> AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&record()) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}
