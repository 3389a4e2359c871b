//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! This crate holds the receipt rules as pure functions with zero I/O
//! dependencies: parsing, validation, and points calculation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  receipt-api (HTTP, axum)                       │   │
//! │  │   POST /receipts/process        GET /receipts/:id/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ receipt-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌──────────┐   │   │
//! │  │   │   types   │  │   money   │  │ validation │  │  points  │   │   │
//! │  │   │  Receipt  │  │   Money   │  │  fail-fast │  │  7 rules │   │   │
//! │  │   │   Item    │  │  "35.35"  │  │  ordering  │  │  summed  │   │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └──────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              receipt-store (id → points, RwLock)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire and parsed receipt types, response bodies
//! - [`money`] - Money type with exact string parsing (no floating point!)
//! - [`validation`] - Receipt validation, fail-fast in a fixed order
//! - [`points`] - The points rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same receipt in, same points (or same error) out
//! 2. **No I/O**: no logging, no shared state, no network
//! 3. **Integer Money**: amounts are parsed to cents, never through `f64`
//! 4. **Explicit Errors**: every failure is a typed variant
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{calculate_points, validate_receipt, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![
//!         Item::new("Mountain Dew 12PK", "6.49"),
//!         Item::new("Emils Cheese Pizza", "12.25"),
//!         Item::new("Knorr Creamy Chicken", "1.26"),
//!         Item::new("Doritos Nacho Cheese", "3.35"),
//!         Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
//!     ],
//!     total: "35.35".to_string(),
//! };
//!
//! let parsed = validate_receipt(&receipt).unwrap();
//! assert_eq!(calculate_points(&parsed).unwrap(), 28);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ErrorKind, ValidationError, ValidationRule};
pub use money::{Money, ParseMoneyError};
pub use points::{calculate_points, PointsBreakdown};
pub use types::*;
pub use validation::validate_receipt;
