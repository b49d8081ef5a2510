//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that totals add up exactly.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Widest cent count an i64 can hold
const MAX_DIGITS: i64 = 19;
const MAX_EXPONENT: i64 = 1_000;

lazy_static! {
    static ref DECIMAL: Regex = Regex::new(
        r"^(?P<sign>[+-])?(?P<whole>\d*)(?:\.(?P<fraction>\d*))?(?:[eE](?P<exponent>[+-]?\d+))?$"
    )
    .unwrap();
}

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use tally::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, returning `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Sum amounts, returning `None` on overflow; an empty iterator sums to zero
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }

    /// Parse a decimal number such as "12", "12.50", ".5", "-3" or "1.5e3"
    ///
    /// Digits past the second decimal place are dropped, so "0.009" parses
    /// to zero. Currency symbols, grouping separators, `NaN` and `Infinity`
    /// are not numbers here.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let captures = DECIMAL
            .captures(s)
            .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?;

        let whole = captures.name("whole").map_or("", |m| m.as_str());
        let fraction = captures.name("fraction").map_or("", |m| m.as_str());
        if whole.is_empty() && fraction.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let negative = captures.name("sign").map_or(false, |m| m.as_str() == "-");
        let exponent = match captures.name("exponent") {
            None => 0,
            // out-of-range exponents only matter by their sign
            Some(m) => m.as_str().parse::<i64>().unwrap_or(if m.as_str().starts_with('-') {
                -MAX_EXPONENT
            } else {
                MAX_EXPONENT
            }),
        };

        // value = digits * 10^shift cents
        let digits = format!("{}{}", whole, fraction);
        let digits = digits.trim_start_matches('0');
        let shift = exponent.clamp(-MAX_EXPONENT, MAX_EXPONENT) + 2 - fraction.len() as i64;

        let cents = if digits.is_empty() {
            0
        } else if shift < 0 {
            let keep = digits.len() as i64 + shift;
            if keep <= 0 {
                0
            } else {
                digits[..keep as usize]
                    .parse::<i64>()
                    .map_err(|_| MoneyParseError::TooLarge(s.to_string()))?
            }
        } else if digits.len() as i64 + shift > MAX_DIGITS {
            return Err(MoneyParseError::TooLarge(s.to_string()));
        } else {
            format!("{}{}", digits, "0".repeat(shift as usize))
                .parse::<i64>()
                .map_err(|_| MoneyParseError::TooLarge(s.to_string()))?
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooLarge(s) => write!(f, "Amount too large: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
