//! # Order Store
//!
//! In-memory mapping from order identifier to [`OrderSummary`].
//!
//! ## Thread Safety
//! The map sits behind a `RwLock` because:
//! 1. Concurrent requests submit orders at the same time
//! 2. Lookups vastly outnumber inserts, so readers share the lock
//! 3. Stored summaries are never mutated, so a poisoned lock still guards
//!    consistent data and is recovered rather than propagated
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit ──► insert() ──► write lock (exclusive)                         │
//! │  get-order ──► get() ──► read lock (shared)                             │
//! │  get-all-orders ──► get_all() ──► read lock (shared)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use checkout_core::OrderSummary;

/// Thread-safe order storage for the lifetime of the process.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: RwLock<HashMap<String, OrderSummary>>,
}

impl OrderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        OrderStore::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, OrderSummary>> {
        self.orders.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, OrderSummary>> {
        self.orders.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a summary under its order id, replacing any previous entry.
    ///
    /// Ids are generated fresh per submission, so no duplicate detection.
    pub fn insert(&self, summary: OrderSummary) {
        self.write().insert(summary.order_id.clone(), summary);
    }

    /// Looks up a summary by id.
    pub fn get(&self, order_id: &str) -> Option<OrderSummary> {
        self.read().get(order_id).cloned()
    }

    /// Returns every stored summary in unspecified order.
    pub fn get_all(&self) -> Vec<OrderSummary> {
        self.read().values().cloned().collect()
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::Money;

    fn summary(id: &str, total: i64) -> OrderSummary {
        OrderSummary {
            order_id: id.to_string(),
            summary: Vec::new(),
            total_cost: Money::from_cents(total),
        }
    }

    #[test]
    fn test_empty_store() {
        let store = OrderStore::new();
        assert!(store.is_empty());
        assert!(store.get_all().is_empty());
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_insert_and_get() {
        let store = OrderStore::new();
        store.insert(summary("a", 60));
        store.insert(summary("b", 110));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a"), Some(summary("a", 60)));

        let mut totals: Vec<i64> = store.get_all().iter().map(|o| o.total_cost.cents()).collect();
        totals.sort_unstable();
        assert_eq!(totals, vec![60, 110]);
    }

    #[test]
    fn test_insert_overwrites() {
        let store = OrderStore::new();
        store.insert(summary("a", 60));
        store.insert(summary("a", 75));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").map(|o| o.total_cost.cents()), Some(75));
    }
}
