//! Turns a line of user input into a [`Command`]
//!
//! A line is a case-sensitive keyword followed by keyword-specific arguments
//! marked with `d/`, `a/`, `c/`, `i/`, `s/` and `e/`. Every field is
//! validated here, so commands only ever carry well-formed data. Parsing
//! never fails: bad input becomes [`Command::Invalid`] with a diagnostic.

mod error;

pub use error::ParseError;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::commands::Command;
use crate::models::{Entry, EntryKind, Money, MoneyParseError};

pub const HELP_KEYWORD: &str = "help";
pub const ADD_EXPENSE_KEYWORD: &str = "add_ex";
pub const ADD_INCOME_KEYWORD: &str = "add_in";
pub const DELETE_EXPENSE_KEYWORD: &str = "del_ex";
pub const DELETE_INCOME_KEYWORD: &str = "del_in";
pub const LIST_EXPENSE_KEYWORD: &str = "list_ex";
pub const LIST_INCOME_KEYWORD: &str = "list_in";
pub const TOTAL_EXPENSE_KEYWORD: &str = "total_ex";
pub const TOTAL_INCOME_KEYWORD: &str = "total_in";
pub const EXPENSE_RANGE_KEYWORD: &str = "btw_ex";
pub const INCOME_RANGE_KEYWORD: &str = "btw_in";
pub const EXIT_KEYWORD: &str = "end";

/// Format accepted for `s/` and `e/` dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

lazy_static! {
    static ref BASIC_COMMAND: Regex = Regex::new(r"^(?P<keyword>\S+)(?P<arguments>.*)$").unwrap();
    static ref ENTRY_ARGUMENTS: Regex = Regex::new(
        r"^d/(?P<description>[^/]+) a/(?P<amount>[^/]+) c/(?P<category>[^/]+)$"
    )
    .unwrap();
    static ref INDEX_ARGUMENTS: Regex = Regex::new(r"^i/(?P<index>[^/]+)$").unwrap();
    // the separating space before e/ ends up in the start group
    static ref DATE_RANGE_ARGUMENTS: Regex =
        Regex::new(r"^s/(?P<start>[^/]+)e/(?P<end>[^/]+)$").unwrap();
    static ref ISO_DATE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

/// Parse one line of user input
pub fn parse_command(input: &str) -> Command {
    match try_parse_command(input) {
        Ok(command) => command,
        Err(err) => {
            debug!(input, error = ?err, "rejected input");
            Command::Invalid(err)
        }
    }
}

fn try_parse_command(input: &str) -> Result<Command, ParseError> {
    let captures = BASIC_COMMAND
        .captures(input.trim())
        .ok_or(ParseError::InvalidCommand)?;
    let keyword = &captures["keyword"];
    let arguments = &captures["arguments"];

    match keyword {
        HELP_KEYWORD => expect_no_arguments(arguments, Command::Help),
        ADD_EXPENSE_KEYWORD => prepare_entry(EntryKind::Expense, arguments).map(Command::AddExpense),
        ADD_INCOME_KEYWORD => prepare_entry(EntryKind::Income, arguments).map(Command::AddIncome),
        DELETE_EXPENSE_KEYWORD => prepare_index(arguments).map(Command::DeleteExpense),
        DELETE_INCOME_KEYWORD => prepare_index(arguments).map(Command::DeleteIncome),
        LIST_EXPENSE_KEYWORD => expect_no_arguments(arguments, Command::ListExpense),
        LIST_INCOME_KEYWORD => expect_no_arguments(arguments, Command::ListIncome),
        TOTAL_EXPENSE_KEYWORD => expect_no_arguments(arguments, Command::TotalExpense),
        TOTAL_INCOME_KEYWORD => expect_no_arguments(arguments, Command::TotalIncome),
        EXPENSE_RANGE_KEYWORD => {
            let (start, end) = prepare_date_range(arguments)?;
            Ok(Command::TotalExpenseBetween { start, end })
        }
        INCOME_RANGE_KEYWORD => {
            let (start, end) = prepare_date_range(arguments)?;
            Ok(Command::TotalIncomeBetween { start, end })
        }
        EXIT_KEYWORD => expect_no_arguments(arguments, Command::Exit),
        _ => Err(ParseError::InvalidCommand),
    }
}

fn expect_no_arguments(arguments: &str, command: Command) -> Result<Command, ParseError> {
    if arguments.trim().is_empty() {
        Ok(command)
    } else {
        Err(ParseError::InvalidCommand)
    }
}

/// `d/<description> a/<amount> c/<category>`
fn prepare_entry(kind: EntryKind, arguments: &str) -> Result<Entry, ParseError> {
    let captures = ENTRY_ARGUMENTS
        .captures(arguments.trim())
        .ok_or(ParseError::InvalidCommand)?;

    let amount = parse_amount(&captures["amount"])?;
    let entry = Entry::new(kind, &captures["description"], amount, &captures["category"])?;
    Ok(entry)
}

/// `i/<index>`
fn prepare_index(arguments: &str) -> Result<usize, ParseError> {
    let captures = INDEX_ARGUMENTS
        .captures(arguments.trim())
        .ok_or(ParseError::InvalidCommand)?;

    parse_index(&captures["index"])
}

/// `s/<yyyy-MM-dd> e/<yyyy-MM-dd>`
fn prepare_date_range(arguments: &str) -> Result<(NaiveDate, NaiveDate), ParseError> {
    let captures = DATE_RANGE_ARGUMENTS
        .captures(arguments.trim())
        .ok_or(ParseError::InvalidCommand)?;

    let start = parse_date(&captures["start"])?;
    let end = parse_date(&captures["end"])?;
    Ok((start, end))
}

/// Parse a strictly positive amount
///
/// Plain and exponent notation are both numeric (`12.50`, `1e3`); a currency
/// symbol is not.
pub fn parse_amount(input: &str) -> Result<Money, ParseError> {
    let input = input.trim();
    let amount = Money::parse(input).map_err(|err| match err {
        MoneyParseError::TooLarge(_) if input.starts_with('-') => ParseError::NonPositiveAmount,
        MoneyParseError::TooLarge(_) => ParseError::AmountTooLarge,
        MoneyParseError::InvalidFormat(_) => ParseError::NonNumericAmount,
    })?;
    if !amount.is_positive() {
        return Err(ParseError::NonPositiveAmount);
    }
    Ok(amount)
}

/// Parse a one-based index
///
/// Indices are 32-bit signed integers. Signed parsing lets `-1` report as
/// non-positive; anything outside the 32-bit range is non-numeric.
pub fn parse_index(input: &str) -> Result<usize, ParseError> {
    let index: i32 = input
        .trim()
        .parse()
        .map_err(|_| ParseError::NonNumericIndex)?;
    if index < 1 {
        return Err(ParseError::NonPositiveIndex);
    }
    usize::try_from(index).map_err(|_| ParseError::NonNumericIndex)
}

/// Parse a `yyyy-MM-dd` calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    let input = input.trim();
    if !ISO_DATE.is_match(input) {
        return Err(ParseError::DateFormat);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| ParseError::DateFormat)
}
