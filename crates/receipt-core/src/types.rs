//! # Domain Types
//!
//! Core domain types used throughout the receipt service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │   Wire (as submitted)              Parsed (after validation)            │
//! │  ┌─────────────────────┐          ┌──────────────────────────┐         │
//! │  │ Receipt             │          │ ParsedReceipt            │         │
//! │  │  retailer           │          │  retailer (trimmed)      │         │
//! │  │  purchase_date: str │  ──────► │  purchase_date: NaiveDate│         │
//! │  │  purchase_time: str │ validate │  purchase_time: NaiveTime│         │
//! │  │  items: Vec<Item>   │          │  items: Vec<ParsedItem>  │         │
//! │  │  total: str         │          │  total: Money            │         │
//! │  └─────────────────────┘          └──────────────────────────┘         │
//! │                                                                         │
//! │  Responses: ProcessReceiptResponse { id }, PointsResponse { points }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Wire types keep every field as a string, exactly as the client sent it.
//! Parsing happens once in [`crate::validation`], so points rules never see
//! unparsed text.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Reward points awarded to a receipt.
pub type Points = i64;

// =============================================================================
// Receipt (wire)
// =============================================================================

/// A purchase receipt as submitted by a client.
///
/// Missing fields deserialize as empty, so an incomplete body is reported by
/// validation with the rule it breaks rather than as unreadable JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    /// Retailer or store name.
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,

    /// Purchase time, `HH:MM` (24-hour).
    pub purchase_time: String,

    /// Line items purchased.
    pub items: Vec<Item>,

    /// Total amount paid, e.g. `"35.35"`.
    pub total: String,
}

/// A line item on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

// =============================================================================
// Parsed Receipt
// =============================================================================

/// A receipt that passed validation, with every field in its typed form.
///
/// Only [`crate::validation::validate_receipt`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReceipt {
    /// Retailer name, trimmed.
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    /// Never empty.
    pub items: Vec<ParsedItem>,
    pub total: Money,
}

/// A validated line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedItem {
    /// Short description, trimmed. Never empty.
    pub description: String,
    pub price: Money,
}

// =============================================================================
// Responses
// =============================================================================

/// Body returned after a receipt is processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessReceiptResponse {
    /// Receipt id (UUID v4, canonical form).
    pub id: String,
}

/// Body returned for a points lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointsResponse {
    #[ts(type = "number")]
    pub points: Points,
}

/// Body returned for any failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_deserializes_camel_case() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}],
            "total": "6.49"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.items, vec![Item::new("Mountain Dew 12PK", "6.49")]);
    }

    #[test]
    fn test_receipt_missing_fields_default_to_empty() {
        let json = r#"{"retailer": "Target", "items": [{}], "total": "1.00"}"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.purchase_date, "");
        assert_eq!(receipt.items, vec![Item::default()]);
    }

    #[test]
    fn test_receipt_wrong_field_type_is_rejected() {
        let json = r#"{"retailer": "Target", "total": 35.35}"#;
        assert!(serde_json::from_str::<Receipt>(json).is_err());
    }

    #[test]
    fn test_response_shapes() {
        let body = serde_json::to_string(&PointsResponse { points: 28 }).unwrap();
        assert_eq!(body, r#"{"points":28}"#);

        let body = serde_json::to_string(&ProcessReceiptResponse {
            id: "abc".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"id":"abc"}"#);
    }
}
