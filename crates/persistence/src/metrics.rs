//! Store metrics collection.
//!
//! Provides functions for recording store-related metrics.

use metrics::{gauge, histogram};
use std::time::Instant;

use crate::memory::InMemoryStore;

/// Record the duration of a store operation.
pub fn record_operation_duration(operation: &str, duration_secs: f64) {
    histogram!(
        "store_operation_duration_seconds",
        "operation" => operation.to_string()
    )
    .record(duration_secs);
}

/// Record the number of records held per collection.
pub fn record_collection_sizes(store: &InMemoryStore) {
    let sizes = store.sizes();
    for (collection, count) in [
        ("requests", sizes.requests),
        ("staff", sizes.staff),
        ("payments", sizes.payments),
        ("services", sizes.services),
        ("announcements", sizes.announcements),
        ("notifications", sizes.notifications),
        ("societies", sizes.societies),
        ("residents", sizes.residents),
    ] {
        gauge!("store_records", "collection" => collection).set(count as f64);
    }
}

/// A helper to time store operations and record metrics.
///
/// Usage:
/// ```ignore
/// let timer = OperationTimer::new("seed_load");
/// let store = InMemoryStore::from_fixture(seed::fixture());
/// timer.record();
/// ```
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_operation_duration(&self.operation, duration);
    }
}
