//! Diagnostics produced while parsing a line of input

use thiserror::Error;

use crate::models::EntryValidationError;

/// Why a line of input did not produce a runnable command
///
/// The `Display` text of each variant is shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown keyword, missing field markers, or unexpected arguments
    #[error("Invalid command. Type \"help\" to see the list of available commands.")]
    InvalidCommand,

    #[error("Only numeric inputs are allowed for the amount.")]
    NonNumericAmount,

    #[error("Only positive amounts are allowed.")]
    NonPositiveAmount,

    #[error("The amount is too large.")]
    AmountTooLarge,

    #[error("The description cannot be blank.")]
    BlankDescription,

    #[error("The category cannot be blank.")]
    BlankCategory,

    #[error("Only numeric inputs are allowed for the index.")]
    NonNumericIndex,

    #[error("Only positive indices are allowed.")]
    NonPositiveIndex,

    #[error("Dates must be given in the yyyy-MM-dd format, e.g. 2023-01-31.")]
    DateFormat,
}

impl From<EntryValidationError> for ParseError {
    fn from(err: EntryValidationError) -> Self {
        match err {
            EntryValidationError::NonPositiveAmount => Self::NonPositiveAmount,
            EntryValidationError::BlankDescription => Self::BlankDescription,
            EntryValidationError::BlankCategory => Self::BlankCategory,
        }
    }
}
