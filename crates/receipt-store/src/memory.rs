//! # In-Memory Points Store
//!
//! `HashMap` behind a `std::sync::RwLock`.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  put()  ──► write lock ──► new_v4 until unused ──► insert ──► unlock    │
//! │  get()  ──► read lock  ──► lookup ──► copy points out ──► unlock        │
//! │                                                                         │
//! │  • Writers exclude each other and all readers                          │
//! │  • Readers run concurrently                                            │
//! │  • The id is drawn and inserted under the same write lock, so two      │
//! │    puts can never be handed the same id                                │
//! │  • No lock is ever held across I/O or an .await                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A poisoned lock is recovered rather than propagated: every write is a
//! single `insert`, so a panicking holder cannot leave the map half-updated.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use receipt_core::Points;
use uuid::Uuid;

use crate::PointsStore;

/// Process-lifetime points store.
#[derive(Debug, Default)]
pub struct InMemoryPointsStore {
    points: RwLock<HashMap<Uuid, Points>>,
}

impl InMemoryPointsStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, Points>> {
        self.points.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, Points>> {
        self.points.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PointsStore for InMemoryPointsStore {
    fn put(&self, points: Points) -> Uuid {
        let mut map = self.write();

        let mut id = Uuid::new_v4();
        while map.contains_key(&id) {
            id = Uuid::new_v4();
        }

        map.insert(id, points);
        id
    }

    fn get(&self, id: &Uuid) -> Option<Points> {
        self.read().get(id).copied()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
