//! Parsed user actions and their execution against the ledger

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};
use crate::ledger::Ledger;
use crate::models::{Entry, EntryKind};
use crate::parser::ParseError;
use crate::ui::Ui;

/// One validated user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    AddExpense(Entry),
    AddIncome(Entry),
    /// One-based index, at least 1
    DeleteExpense(usize),
    /// One-based index, at least 1
    DeleteIncome(usize),
    ListExpense,
    ListIncome,
    TotalExpense,
    TotalIncome,
    TotalExpenseBetween { start: NaiveDate, end: NaiveDate },
    TotalIncomeBetween { start: NaiveDate, end: NaiveDate },
    Exit,
    Invalid(ParseError),
}

impl Command {
    /// Whether the interaction loop should stop after this command
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Run the command
    ///
    /// A delete with an index past the end of the list, or a total too large
    /// to represent, reports the error through `ui` and leaves the ledger
    /// untouched. Only failures to write to the console are returned.
    pub fn execute<W: Write>(&self, ledger: &mut Ledger, ui: &mut Ui<W>) -> TallyResult<()> {
        match self {
            Command::Help => ui.print_help()?,
            Command::AddExpense(entry) | Command::AddIncome(entry) => {
                ledger.add(entry.clone());
                ui.print_entry_added(entry)?;
            }
            Command::DeleteExpense(index) => match ledger.remove_expense(*index) {
                Ok(entry) => ui.print_entry_deleted(&entry)?,
                Err(err) => report(err, ui)?,
            },
            Command::DeleteIncome(index) => match ledger.remove_income(*index) {
                Ok(entry) => ui.print_entry_deleted(&entry)?,
                Err(err) => report(err, ui)?,
            },
            Command::ListExpense => ui.print_entry_list(EntryKind::Expense, ledger.expenses())?,
            Command::ListIncome => ui.print_entry_list(EntryKind::Income, ledger.incomes())?,
            Command::TotalExpense => match ledger.total_expense() {
                Ok(total) => ui.print_total(EntryKind::Expense, total)?,
                Err(err) => report(err, ui)?,
            },
            Command::TotalIncome => match ledger.total_income() {
                Ok(total) => ui.print_total(EntryKind::Income, total)?,
                Err(err) => report(err, ui)?,
            },
            Command::TotalExpenseBetween { start, end } => {
                match ledger.total_expense_between(*start, *end) {
                    Ok(total) => ui.print_total_between(EntryKind::Expense, total, *start, *end)?,
                    Err(err) => report(err, ui)?,
                }
            }
            Command::TotalIncomeBetween { start, end } => {
                match ledger.total_income_between(*start, *end) {
                    Ok(total) => ui.print_total_between(EntryKind::Income, total, *start, *end)?,
                    Err(err) => report(err, ui)?,
                }
            }
            Command::Exit => ui.print_goodbye()?,
            Command::Invalid(err) => ui.print_error(&err.to_string())?,
        }

        Ok(())
    }
}

/// Print errors about the user's data and pass anything else up
fn report<W: Write>(err: TallyError, ui: &mut Ui<W>) -> TallyResult<()> {
    if !err.is_recoverable() {
        return Err(err);
    }
    ui.print_error(&err.to_string())?;
    Ok(())
}
