//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  "35.35" parsed as f64 = 35.35000000000000142...                        │
//! │  35.35 % 0.25 != 0 and 35.35 * 100 = 3535.0000000000005                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "35.35" → 3535 cents, parsed digit by digit                          │
//! │    3535 % 25 and 3535 % 100 are exact                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Amounts arrive as strings of the form `^\d+\.\d{2}$`: one or more ASCII
//! digits, a decimal point, exactly two ASCII digits. No sign, no thousands
//! separators, no exponent.
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let total: Money = "35.35".parse().unwrap();
//! assert_eq!(total.cents(), 3535);
//!
//! assert!("35.3".parse::<Money>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// Parse Error
// =============================================================================

/// Why an amount string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("amount is empty")]
    Empty,

    #[error("amount must contain a decimal point")]
    MissingDecimalPoint,

    #[error("amount must contain only digits and one decimal point")]
    InvalidDigit,

    #[error("amount must have one or more dollar digits and exactly two cent digits")]
    FractionDigits,

    #[error("amount is too large")]
    Overflow,
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// Amounts parsed from receipts are never negative, but the inner type stays
/// `i64` so cents flow straight into points arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// True when the amount is a whole number of dollars.
    ///
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert!(Money::from_cents(900).is_round_dollar());
    /// assert!(!Money::from_cents(901).is_round_dollar());
    /// ```
    #[inline]
    pub const fn is_round_dollar(&self) -> bool {
        self.0 % 100 == 0
    }

    /// True when the amount is a multiple of $0.25.
    #[inline]
    pub const fn is_quarter_multiple(&self) -> bool {
        self.0 % 25 == 0
    }

    /// Returns the amount in dollars as a float.
    ///
    /// Only the description-length rule uses this. Everything else stays in
    /// integer cents.
    #[inline]
    pub fn as_dollars_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    /// Parses `^\d+\.\d{2}$` into exact cents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (whole, fraction) = s
            .split_once('.')
            .ok_or(ParseMoneyError::MissingDecimalPoint)?;

        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError::InvalidDigit);
        }

        if whole.is_empty() || fraction.len() != 2 {
            return Err(ParseMoneyError::FractionDigits);
        }

        let mut cents: i64 = 0;
        for b in whole.bytes().chain(fraction.bytes()) {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(i64::from(b - b'0')))
                .ok_or(ParseMoneyError::Overflow)?;
        }

        Ok(Money(cents))
    }
}

/// Renders in wire format (`35.35`), so a parsed amount displays as it arrived.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
