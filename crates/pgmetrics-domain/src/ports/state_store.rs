//! Snapshot State Store Port
//!
//! Persists the last emitted snapshot so the monitoring agent can track
//! deltas between invocations.

use crate::error::Result;
use crate::value_objects::MetricSnapshot;

/// A snapshot as it was last persisted
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSnapshot {
    /// Collected values
    pub snapshot: MetricSnapshot,
    /// Unix timestamp (seconds) of the collection
    pub timestamp: i64,
}

/// Persistence for the last emitted snapshot
pub trait SnapshotStateStore: Send + Sync {
    /// Replace the stored snapshot
    fn save(&self, snapshot: &MetricSnapshot, timestamp: i64) -> Result<()>;

    /// Load the stored snapshot, if any
    fn load(&self) -> Result<Option<StoredSnapshot>>;
}
