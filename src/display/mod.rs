//! Display formatting for terminal output
//!
//! Turns entries and amounts into the strings printed by [`crate::ui::Ui`].

pub mod entry;

pub use entry::{format_entry_summary, format_entry_table, format_total};

use chrono::NaiveDate;
use std::fmt::Write;

use crate::config::Settings;
use crate::models::Money;

/// How amounts and dates are rendered
#[derive(Debug, Clone)]
pub struct DisplayStyle {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl DisplayStyle {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date, falling back to ISO 8601 if the configured format is invalid
    pub fn date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.format("%Y-%m-%d").to_string();
        }
        out
    }
}
