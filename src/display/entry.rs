//! Entry display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::DisplayStyle;
use crate::models::{Entry, Money};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// One-line summary of an entry, e.g. `[FOOD] Lunch - $12.50 (2023-07-04)`
pub fn format_entry_summary(entry: &Entry, style: &DisplayStyle) -> String {
    format!(
        "[{}] {} - {} ({})",
        entry.category(),
        entry.description(),
        style.money(entry.amount()),
        style.date(entry.date())
    )
}

/// Table of entries numbered from 1 in the order given
///
/// Returns an empty string for an empty slice; callers print their own
/// "nothing recorded" message.
pub fn format_entry_table(entries: &[Entry], style: &DisplayStyle) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let rows = entries.iter().enumerate().map(|(i, entry)| EntryRow {
        index: i + 1,
        date: style.date(entry.date()),
        description: entry.description().to_string(),
        category: entry.category().to_string(),
        amount: style.money(entry.amount()),
    });

    Table::new(rows).with(Style::modern()).to_string()
}

/// `<label>: <amount>`
pub fn format_total(label: &str, total: Money, style: &DisplayStyle) -> String {
    format!("{}: {}", label, style.money(total))
}
