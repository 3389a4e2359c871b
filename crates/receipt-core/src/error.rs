//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── CoreError        - What ReceiptService returns                    │
//! │  └── ValidationError  - Which receipt rule failed                      │
//! │                                                                         │
//! │  receipt-api errors (separate crate)                                   │
//! │  └── ApiError         - What HTTP clients see                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP status + body     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers branch on [`CoreError::kind`] and [`ValidationError::rule`], never
//! on message text.

use thiserror::Error;

use crate::money::ParseMoneyError;

// =============================================================================
// Core Error
// =============================================================================

/// Broad classification of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The submitted receipt failed validation.
    InvalidReceipt,
    /// No points are stored under the requested id.
    NotFound,
    /// Points could not be computed for a receipt that passed validation.
    Internal,
}

/// Errors returned by receipt processing and points lookup.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Receipt failed validation. Nothing was stored.
    #[error("invalid receipt data: {0}")]
    InvalidReceipt(#[from] ValidationError),

    /// Lookup id is unknown (or not an id at all).
    #[error("receipt not found: {0}")]
    ReceiptNotFound(String),

    /// Points calculation failed after validation passed.
    ///
    /// ## When This Occurs
    /// Only when the points sum overflows `i64`, which no realistic receipt
    /// reaches. Treat it as a logic inconsistency.
    #[error("points calculation failed: {0}")]
    PointsCalculation(String),
}

impl CoreError {
    /// Returns the error classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidReceipt(_) => ErrorKind::InvalidReceipt,
            CoreError::ReceiptNotFound(_) => ErrorKind::NotFound,
            CoreError::PointsCalculation(_) => ErrorKind::Internal,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// The receipt rule a [`ValidationError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    Retailer,
    PurchaseDate,
    PurchaseTime,
    Items,
    Total,
    ItemDescription,
    ItemPrice,
}

/// Receipt validation failures, one variant per rule.
///
/// Item indexes are 1-based, matching how a person counts receipt lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("retailer name cannot be empty")]
    EmptyRetailer,

    #[error("invalid purchase date '{value}': expected YYYY-MM-DD")]
    InvalidPurchaseDate { value: String },

    #[error("invalid purchase time '{value}': expected HH:MM (24-hour)")]
    InvalidPurchaseTime { value: String },

    #[error("receipt must contain at least one item")]
    NoItems,

    #[error("invalid total format '{value}': {reason}")]
    InvalidTotal {
        value: String,
        reason: ParseMoneyError,
    },

    #[error("item {index} has empty description")]
    EmptyItemDescription { index: usize },

    #[error("invalid price format for item {index} '{value}': {reason}")]
    InvalidItemPrice {
        index: usize,
        value: String,
        reason: ParseMoneyError,
    },
}

impl ValidationError {
    /// Returns the rule this error violates.
    pub fn rule(&self) -> ValidationRule {
        match self {
            ValidationError::EmptyRetailer => ValidationRule::Retailer,
            ValidationError::InvalidPurchaseDate { .. } => ValidationRule::PurchaseDate,
            ValidationError::InvalidPurchaseTime { .. } => ValidationRule::PurchaseTime,
            ValidationError::NoItems => ValidationRule::Items,
            ValidationError::InvalidTotal { .. } => ValidationRule::Total,
            ValidationError::EmptyItemDescription { .. } => ValidationRule::ItemDescription,
            ValidationError::InvalidItemPrice { .. } => ValidationRule::ItemPrice,
        }
    }

    /// Returns the 1-based item index for item-level failures.
    pub fn item_index(&self) -> Option<usize> {
        match self {
            ValidationError::EmptyItemDescription { index }
            | ValidationError::InvalidItemPrice { index, .. } => Some(*index),
            _ => None,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::InvalidTotal {
            value: "35.3".to_string(),
            reason: ParseMoneyError::FractionDigits,
        };
        assert_eq!(
            err.to_string(),
            "invalid total format '35.3': amount must have one or more dollar digits and exactly two cent digits"
        );

        let err = ValidationError::EmptyItemDescription { index: 3 };
        assert_eq!(err.to_string(), "item 3 has empty description");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::NoItems.into();
        assert!(matches!(core_err, CoreError::InvalidReceipt(_)));
        assert_eq!(core_err.kind(), ErrorKind::InvalidReceipt);
        assert_eq!(
            core_err.to_string(),
            "invalid receipt data: receipt must contain at least one item"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            CoreError::ReceiptNotFound("x".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            CoreError::PointsCalculation("overflow".into()).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_item_index() {
        let err = ValidationError::InvalidItemPrice {
            index: 2,
            value: "1".into(),
            reason: ParseMoneyError::MissingDecimalPoint,
        };
        assert_eq!(err.item_index(), Some(2));
        assert_eq!(err.rule(), ValidationRule::ItemPrice);
        assert_eq!(ValidationError::EmptyRetailer.item_index(), None);
    }
}
