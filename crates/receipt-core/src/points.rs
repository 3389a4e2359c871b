//! # Points Module
//!
//! The points rules. Every rule is evaluated independently and the results
//! are summed; no rule excludes another.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #  Rule                  Points                                        │
//! │  ─  ────────────────────  ──────────────────────────────────────────    │
//! │  1  retailer characters   +1 per Unicode letter or digit               │
//! │  2  round dollar total    +50 if total cents % 100 == 0                │
//! │  3  quarter total         +25 if total cents % 25 == 0                 │
//! │  4  item pairs            +5 per two items                             │
//! │  5  description length    ceil(price × 0.2) per item whose trimmed     │
//! │                           description length is a multiple of 3        │
//! │  6  odd day               +6 if day of month is odd                    │
//! │  7  afternoon             +10 if 14:00 < time < 16:00                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::{calculate_points, validate_receipt, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![Item::new("Gatorade", "2.25"); 4],
//!     total: "9.00".to_string(),
//! };
//!
//! let parsed = validate_receipt(&receipt).unwrap();
//! assert_eq!(calculate_points(&parsed).unwrap(), 109);
//! ```

use chrono::{Datelike, NaiveTime};
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{ParsedItem, ParsedReceipt, Points};

const ROUND_DOLLAR_BONUS: Points = 50;
const QUARTER_MULTIPLE_BONUS: Points = 25;
const POINTS_PER_ITEM_PAIR: Points = 5;
const DESCRIPTION_LENGTH_DIVISOR: usize = 3;
const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
const ODD_DAY_BONUS: Points = 6;
const AFTERNOON_BONUS: Points = 10;

// Exclusive on both ends.
const AFTERNOON_START: (u32, u32) = (14, 0);
const AFTERNOON_END: (u32, u32) = (16, 0);

// =============================================================================
// Breakdown
// =============================================================================

/// Points contributed by each rule for one receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointsBreakdown {
    pub retailer_name: Points,
    pub round_dollar: Points,
    pub quarter_multiple: Points,
    pub item_pairs: Points,
    pub item_descriptions: Points,
    pub odd_day: Points,
    pub afternoon: Points,
}

impl PointsBreakdown {
    /// Computes every rule for a validated receipt.
    ///
    /// Fails only if a single rule's value overflows `i64`.
    pub fn for_receipt(receipt: &ParsedReceipt) -> CoreResult<Self> {
        Ok(PointsBreakdown {
            retailer_name: retailer_name_points(&receipt.retailer)?,
            round_dollar: round_dollar_points(receipt.total),
            quarter_multiple: quarter_multiple_points(receipt.total),
            item_pairs: item_pair_points(receipt.items.len())?,
            item_descriptions: receipt
                .items
                .iter()
                .try_fold(0, |acc: Points, item| checked_sum(acc, description_points(item)?))?,
            odd_day: odd_day_points(receipt.purchase_date.day()),
            afternoon: afternoon_points(receipt.purchase_time),
        })
    }

    /// Sum of every rule.
    pub fn total(&self) -> CoreResult<Points> {
        [
            self.retailer_name,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .try_fold(0, checked_sum)
    }
}

/// Computes the total points for a validated receipt.
pub fn calculate_points(receipt: &ParsedReceipt) -> CoreResult<Points> {
    PointsBreakdown::for_receipt(receipt)?.total()
}

// =============================================================================
// Rules
// =============================================================================

/// Rule 1: one point per letter or digit in the retailer name.
///
/// A letter is any character in a Unicode `L*` category and a digit is a
/// decimal digit (`Nd`). Other numerics such as `½` and combining marks do
/// not count.
///
/// ```rust
/// use receipt_core::points::retailer_name_points;
///
/// assert_eq!(retailer_name_points("M&M Corner Market").unwrap(), 14);
/// assert_eq!(retailer_name_points("Café 7").unwrap(), 5);
/// ```
pub fn retailer_name_points(retailer: &str) -> CoreResult<Points> {
    let count = retailer.chars().filter(|&c| is_letter_or_digit(c)).count();
    to_points(count)
}

fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// Rule 2: bonus when the total has no cents.
pub fn round_dollar_points(total: Money) -> Points {
    if total.is_round_dollar() {
        ROUND_DOLLAR_BONUS
    } else {
        0
    }
}

/// Rule 3: bonus when the total is a multiple of $0.25.
pub fn quarter_multiple_points(total: Money) -> Points {
    if total.is_quarter_multiple() {
        QUARTER_MULTIPLE_BONUS
    } else {
        0
    }
}

/// Rule 4: five points for every two items.
pub fn item_pair_points(item_count: usize) -> CoreResult<Points> {
    to_points(item_count / 2)?
        .checked_mul(POINTS_PER_ITEM_PAIR)
        .ok_or_else(overflow)
}

/// Rule 5: `ceil(price × 0.2)` when the trimmed description length is a
/// multiple of three.
///
/// Length counts characters, not bytes. This is the one rule that uses
/// floating point, and it always rounds up.
///
/// ```rust
/// use receipt_core::money::Money;
/// use receipt_core::points::description_points;
/// use receipt_core::ParsedItem;
///
/// let item = ParsedItem {
///     description: "Emils Cheese Pizza".to_string(), // 18 chars
///     price: Money::from_cents(1225),
/// };
/// assert_eq!(description_points(&item).unwrap(), 3); // ceil(2.45)
/// ```
pub fn description_points(item: &ParsedItem) -> CoreResult<Points> {
    if item.description.chars().count() % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return Ok(0);
    }

    let points = (item.price.as_dollars_f64() * DESCRIPTION_PRICE_MULTIPLIER).ceil();
    if !points.is_finite() || points >= Points::MAX as f64 {
        return Err(overflow());
    }

    Ok(points as Points)
}

/// Rule 6: bonus when the day of month is odd.
pub fn odd_day_points(day_of_month: u32) -> Points {
    if day_of_month % 2 == 1 {
        ODD_DAY_BONUS
    } else {
        0
    }
}

/// Rule 7: bonus for purchases strictly between 14:00 and 16:00.
///
/// ```rust
/// use chrono::NaiveTime;
/// use receipt_core::points::afternoon_points;
///
/// let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// assert_eq!(afternoon_points(at(14, 0)), 0);
/// assert_eq!(afternoon_points(at(14, 1)), 10);
/// assert_eq!(afternoon_points(at(15, 59)), 10);
/// assert_eq!(afternoon_points(at(16, 0)), 0);
/// ```
pub fn afternoon_points(time: NaiveTime) -> Points {
    let window = (
        NaiveTime::from_hms_opt(AFTERNOON_START.0, AFTERNOON_START.1, 0),
        NaiveTime::from_hms_opt(AFTERNOON_END.0, AFTERNOON_END.1, 0),
    );

    match window {
        (Some(start), Some(end)) if time > start && time < end => AFTERNOON_BONUS,
        _ => 0,
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn overflow() -> CoreError {
    CoreError::PointsCalculation("points total overflowed".to_string())
}

fn to_points(n: usize) -> CoreResult<Points> {
    Points::try_from(n).map_err(|_| overflow())
}

fn checked_sum(acc: Points, value: Points) -> CoreResult<Points> {
    acc.checked_add(value).ok_or_else(overflow)
}

// =============================================================================
// Unit Tests
// =============================================================================
