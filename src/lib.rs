//! Tally - a command-line tracker for expenses and income
//!
//! Tally reads one command per line, such as `add_ex d/Lunch a/12.50 c/food`
//! or `btw_in s/2023-01-01 e/2023-12-31`, and applies it to an in-memory
//! ledger.
//!
//! # Architecture
//!
//! - `parser`: turns a line into a validated `Command`, never failing
//! - `commands`: the `Command` variants and their execution
//! - `ledger`: ordered expense and income lists with totals
//! - `models`: `Money` and `Entry`
//! - `ui` / `display`: console output
//! - `app`: the interaction loop
//! - `config`: paths and user settings
//! - `audit`: append-only log of ledger changes
//! - `error`: custom error types
//!
//! # Example
//!
//! ```
//! use tally::display::DisplayStyle;
//! use tally::ledger::Ledger;
//! use tally::parser::parse_command;
//! use tally::ui::Ui;
//!
//! let mut ledger = Ledger::new();
//! let mut ui = Ui::new(Vec::new(), DisplayStyle::default(), "> ");
//! parse_command("add_ex d/Lunch a/12.50 c/food")
//!     .execute(&mut ledger, &mut ui)
//!     .unwrap();
//! assert_eq!(ledger.total_expense().unwrap().cents(), 1250);
//! ```

pub mod app;
pub mod audit;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod parser;
pub mod ui;

pub use error::{TallyError, TallyResult};
