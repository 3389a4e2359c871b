//! Receipt service: validate, score, store, look up.
//!
//! ```text
//! process_receipt(receipt)
//!      │
//!      ▼
//! validate_receipt ──✗──► CoreError::InvalidReceipt   (nothing stored)
//!      │
//!      ▼
//! calculate_points ──✗──► CoreError::PointsCalculation (nothing stored)
//!      │
//!      ▼
//! store.put(points) ────► Uuid
//! ```
//!
//! The service keeps no state of its own; everything lives in the store.

use receipt_core::{calculate_points, validate_receipt, CoreError, CoreResult, Points, Receipt};
use receipt_store::{InMemoryPointsStore, PointsStore};
use uuid::Uuid;

/// Scores receipts and serves stored points.
#[derive(Debug)]
pub struct ReceiptService<S = InMemoryPointsStore> {
    store: S,
}

impl ReceiptService<InMemoryPointsStore> {
    /// Create a service over a fresh in-memory store.
    pub fn in_memory() -> Self {
        ReceiptService::new(InMemoryPointsStore::new())
    }
}

impl<S: PointsStore> ReceiptService<S> {
    /// Create a service over `store`.
    pub fn new(store: S) -> Self {
        ReceiptService { store }
    }

    /// Validates and scores `receipt`, stores the points, and returns the new
    /// receipt id.
    pub fn process_receipt(&self, receipt: &Receipt) -> CoreResult<Uuid> {
        let parsed = validate_receipt(receipt)?;
        let points = calculate_points(&parsed)?;
        Ok(self.store.put(points))
    }

    /// Returns the points stored for `id`.
    ///
    /// Ids match exactly: only the lowercase hyphenated form handed out by
    /// [`process_receipt`](Self::process_receipt) resolves. Anything else,
    /// including other spellings of the same UUID, is not found.
    pub fn get_points(&self, id: &str) -> CoreResult<Points> {
        let not_found = || CoreError::ReceiptNotFound(id.to_string());

        let key = Uuid::try_parse(id)
            .ok()
            .filter(|key| key.to_string() == id)
            .ok_or_else(not_found)?;
        self.store.get(&key).ok_or_else(not_found)
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    use receipt_core::{ErrorKind, Item, ValidationRule};

    fn target_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: "35.35".to_string(),
        }
    }

    fn receipt_at(time: &str) -> Receipt {
        Receipt {
            retailer: "A".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: time.to_string(),
            items: vec![Item::new("Gatorade", "1.01")],
            total: "1.01".to_string(),
        }
    }

    #[test]
    fn test_round_trip() {
        let service = ReceiptService::in_memory();
        let id = service.process_receipt(&target_receipt()).unwrap();

        assert_eq!(service.get_points(&id.to_string()).unwrap(), 28);
    }

    #[test]
    fn test_afternoon_boundaries_through_service() {
        let service = ReceiptService::in_memory();
        // 1 point for the retailer; the afternoon bonus is the only variable.
        for (time, expected) in [("14:00", 1), ("14:01", 11), ("15:59", 11), ("16:00", 1)] {
            let id = service.process_receipt(&receipt_at(time)).unwrap();
            assert_eq!(service.get_points(&id.to_string()).unwrap(), expected, "{time}");
        }
    }

    #[test]
    fn test_invalid_receipt_stores_nothing() {
        let service = ReceiptService::in_memory();
        let mut receipt = target_receipt();
        receipt.total = "35.3".to_string();

        let err = service.process_receipt(&receipt).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidReceipt);
        match err {
            CoreError::InvalidReceipt(v) => assert_eq!(v.rule(), ValidationRule::Total),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(service.store().is_empty());
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let service = ReceiptService::in_memory();
        service.process_receipt(&receipt_at("10:00")).unwrap();

        let random = Uuid::new_v4().to_string();
        for id in ["nonexistent-id", "", random.as_str()] {
            let err = service.get_points(id).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotFound, "{id}");
        }
    }

    #[test]
    fn test_only_the_issued_id_form_resolves() {
        let service = ReceiptService::in_memory();
        let id = service.process_receipt(&target_receipt()).unwrap();
        let issued = id.to_string();

        let respellings = [
            issued.to_uppercase(),
            format!("{{{issued}}}"),
            format!("urn:uuid:{issued}"),
            id.simple().to_string(),
        ];
        for other in &respellings {
            let err = service.get_points(other).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotFound, "{other}");
        }

        assert_eq!(service.get_points(&issued).unwrap(), 28);
    }

    #[test]
    fn test_concurrent_submissions() {
        const SUBMISSIONS: usize = 1000;
        let service = ReceiptService::in_memory();
        let receipt = target_receipt();

        let ids: Vec<Uuid> = thread::scope(|s| {
            let handles: Vec<_> = (0..SUBMISSIONS)
                .map(|_| s.spawn(|| service.process_receipt(&receipt).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), SUBMISSIONS);
        assert_eq!(service.store().len(), SUBMISSIONS);

        for id in ids {
            assert_eq!(service.get_points(&id.to_string()).unwrap(), 28);
        }
    }
}
