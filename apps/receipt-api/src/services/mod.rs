//! Service implementations.

pub mod receipt_service;

pub use receipt_service::ReceiptService;
