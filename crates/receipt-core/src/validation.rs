//! # Validation Module
//!
//! Turns a submitted [`Receipt`] into a [`ParsedReceipt`], or reports the
//! first rule it breaks.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Fail-Fast Rule Order                               │
//! │                                                                         │
//! │  1. retailer          trimmed, non-empty                               │
//! │  2. purchaseDate      YYYY-MM-DD, a real calendar date                 │
//! │  3. purchaseTime      HH:MM, 00:00 - 23:59                             │
//! │  4. items             at least one                                     │
//! │  5. total             ^\d+\.\d{2}$                                     │
//! │  6. items[i]          description trimmed non-empty, then price        │
//! │                                                                         │
//! │  The first failure wins. Same receipt → same error, every time.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::{validate_receipt, Item, Receipt, ValidationRule};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![Item::new("Mountain Dew 12PK", "6.49")],
//!     total: "35.3".to_string(),
//! };
//!
//! let err = validate_receipt(&receipt).unwrap_err();
//! assert_eq!(err.rule(), ValidationRule::Total);
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{ParsedItem, ParsedReceipt, Receipt};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

// =============================================================================
// Receipt Validation
// =============================================================================

/// Validates a receipt and returns its parsed form.
pub fn validate_receipt(receipt: &Receipt) -> ValidationResult<ParsedReceipt> {
    let retailer = validate_retailer(&receipt.retailer)?;
    let purchase_date = parse_purchase_date(&receipt.purchase_date)?;
    let purchase_time = parse_purchase_time(&receipt.purchase_time)?;

    if receipt.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    let total: Money = receipt
        .total
        .parse()
        .map_err(|reason| ValidationError::InvalidTotal {
            value: receipt.total.clone(),
            reason,
        })?;

    let items = receipt
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let index = i + 1;

            let description = item.short_description.trim();
            if description.is_empty() {
                return Err(ValidationError::EmptyItemDescription { index });
            }

            let price = item
                .price
                .parse::<Money>()
                .map_err(|reason| ValidationError::InvalidItemPrice {
                    index,
                    value: item.price.clone(),
                    reason,
                })?;

            Ok(ParsedItem {
                description: description.to_string(),
                price,
            })
        })
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(ParsedReceipt {
        retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the retailer name and returns it trimmed.
pub fn validate_retailer(retailer: &str) -> ValidationResult<String> {
    let retailer = retailer.trim();

    if retailer.is_empty() {
        return Err(ValidationError::EmptyRetailer);
    }

    Ok(retailer.to_string())
}

/// Parses a `YYYY-MM-DD` purchase date.
///
/// chrono alone accepts single-digit months and days, so the shape is
/// checked first.
///
/// ```rust
/// use receipt_core::validation::parse_purchase_date;
///
/// assert!(parse_purchase_date("2022-03-20").is_ok());
/// assert!(parse_purchase_date("2022-3-20").is_err());
/// assert!(parse_purchase_date("2022-02-30").is_err());
/// ```
pub fn parse_purchase_date(value: &str) -> ValidationResult<NaiveDate> {
    let invalid = || ValidationError::InvalidPurchaseDate {
        value: value.to_string(),
    };

    if !matches_shape(value, "dddd-dd-dd") {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Parses an `HH:MM` purchase time on a 24-hour clock.
///
/// The hour may be written with one digit; minutes always take two.
///
/// ```rust
/// use receipt_core::validation::parse_purchase_time;
///
/// assert!(parse_purchase_time("14:33").is_ok());
/// assert!(parse_purchase_time("9:05").is_ok());
/// assert!(parse_purchase_time("09:5").is_err());
/// assert!(parse_purchase_time("24:00").is_err());
/// assert!(parse_purchase_time("2:33pm").is_err());
/// ```
pub fn parse_purchase_time(value: &str) -> ValidationResult<NaiveTime> {
    let invalid = || ValidationError::InvalidPurchaseTime {
        value: value.to_string(),
    };

    if !matches_shape(value, "dd:dd") && !matches_shape(value, "d:dd") {
        return Err(invalid());
    }

    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| invalid())
}

/// `d` in `shape` matches one ASCII digit; any other byte matches itself.
fn matches_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.bytes()).all(|(v, s)| match s {
            b'd' => v.is_ascii_digit(),
            _ => v == s,
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
