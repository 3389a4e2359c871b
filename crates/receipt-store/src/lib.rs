//! # receipt-store: Points Store
//!
//! Keeps the points computed for each accepted receipt, keyed by the id
//! returned to the client.
//!
//! ## Store Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Points Store                                      │
//! │                                                                         │
//! │  ReceiptService                                                        │
//! │       │                                                                 │
//! │       │  store.put(28)            store.get(&id)                       │
//! │       ▼                                ▼                                │
//! │  PointsStore (trait)                                                   │
//! │  ├── put(&self, points) -> Uuid     never fails                        │
//! │  └── get(&self, &Uuid) -> Option    never mutates                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InMemoryPointsStore                                                   │
//! │  RwLock<HashMap<Uuid, Points>>                                         │
//! │  • put: write lock (exclusive)                                         │
//! │  • get: read lock (shared with other readers)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use receipt_store::{InMemoryPointsStore, PointsStore};
//!
//! let store = InMemoryPointsStore::new();
//! let id = store.put(28);
//!
//! assert_eq!(store.get(&id), Some(28));
//! assert_eq!(store.get(&uuid::Uuid::new_v4()), None);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod memory;

// =============================================================================
// Re-exports
// =============================================================================

pub use memory::InMemoryPointsStore;

use std::sync::Arc;

use receipt_core::Points;
use uuid::Uuid;

// =============================================================================
// Store Trait
// =============================================================================

/// Identifier-indexed storage for receipt points.
///
/// Implementations must be safe to call from any number of threads at
/// once, and no two `put` calls may ever return the same id.
pub trait PointsStore: Send + Sync {
    /// Stores `points` under a freshly generated id and returns the id.
    fn put(&self, points: Points) -> Uuid;

    /// Returns the points stored under `id`, or `None` if the id is unknown.
    fn get(&self, id: &Uuid) -> Option<Points>;

    /// Number of stored receipts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: PointsStore + ?Sized> PointsStore for Arc<S> {
    fn put(&self, points: Points) -> Uuid {
        (**self).put(points)
    }

    fn get(&self, id: &Uuid) -> Option<Points> {
        (**self).get(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
