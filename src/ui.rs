//! Console output
//!
//! `Ui` owns the output stream so the interaction loop and commands can be
//! driven against any `Write`, including an in-memory buffer in tests.

use std::io::{self, Write};

use chrono::NaiveDate;

use crate::display::{format_entry_summary, format_entry_table, format_total, DisplayStyle};
use crate::models::{Entry, EntryKind, Money};

const DIVIDER: &str = "------------------------------------------------------------";

const HELP_TEXT: &str = "\
Available commands:
  help                                     Show this message
  add_ex d/<desc> a/<amount> c/<category>  Add an expense
  add_in d/<desc> a/<amount> c/<category>  Add an income
  del_ex i/<index>                         Delete the expense at <index>
  del_in i/<index>                         Delete the income at <index>
  list_ex                                  List all expenses
  list_in                                  List all income
  total_ex                                 Show the sum of all expenses
  total_in                                 Show the sum of all income
  btw_ex s/<yyyy-MM-dd> e/<yyyy-MM-dd>     Sum expenses dated in the range
  btw_in s/<yyyy-MM-dd> e/<yyyy-MM-dd>     Sum income dated in the range
  end                                      Exit the program";

/// Writes user-facing messages to an output stream
pub struct Ui<W: Write> {
    out: W,
    style: DisplayStyle,
    prompt: String,
}

impl<W: Write> Ui<W> {
    pub fn new(out: W, style: DisplayStyle, prompt: impl Into<String>) -> Self {
        Self {
            out,
            style,
            prompt: prompt.into(),
        }
    }

    /// Consume the Ui and return the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_welcome(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", DIVIDER)?;
        writeln!(self.out, "Welcome to Tally! Type \"help\" for a list of commands.")?;
        writeln!(self.out, "{}", DIVIDER)
    }

    pub fn print_prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", self.prompt)?;
        self.out.flush()
    }

    pub fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", HELP_TEXT)
    }

    pub fn print_goodbye(&mut self) -> io::Result<()> {
        writeln!(self.out, "Bye! Hope to see you again soon.")
    }

    pub fn print_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "Error: {}", message)
    }

    pub fn print_entry_added(&mut self, entry: &Entry) -> io::Result<()> {
        let summary = format_entry_summary(entry, &self.style);
        writeln!(self.out, "Added {}: {}", noun(entry.kind()), summary)
    }

    pub fn print_entry_deleted(&mut self, entry: &Entry) -> io::Result<()> {
        let summary = format_entry_summary(entry, &self.style);
        writeln!(self.out, "Deleted {}: {}", noun(entry.kind()), summary)
    }

    pub fn print_entry_list(&mut self, kind: EntryKind, entries: &[Entry]) -> io::Result<()> {
        if entries.is_empty() {
            return match kind {
                EntryKind::Expense => writeln!(self.out, "You have no expenses recorded."),
                EntryKind::Income => writeln!(self.out, "You have no income recorded."),
            };
        }

        writeln!(self.out, "{}", format_entry_table(entries, &self.style))
    }

    pub fn print_total(&mut self, kind: EntryKind, total: Money) -> io::Result<()> {
        let label = match kind {
            EntryKind::Expense => "Total expenses",
            EntryKind::Income => "Total income",
        };
        writeln!(self.out, "{}", format_total(label, total, &self.style))
    }

    pub fn print_total_between(
        &mut self,
        kind: EntryKind,
        total: Money,
        start: NaiveDate,
        end: NaiveDate,
    ) -> io::Result<()> {
        let label = match kind {
            EntryKind::Expense => "Total expenses",
            EntryKind::Income => "Total income",
        };
        let label = format!(
            "{} from {} to {}",
            label,
            self.style.date(start),
            self.style.date(end)
        );
        writeln!(self.out, "{}", format_total(&label, total, &self.style))
    }
}

fn noun(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Expense => "expense",
        EntryKind::Income => "income",
    }
}
