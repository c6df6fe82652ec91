//! Collection Service Use Case
//!
//! One invocation of the collector: either fetch and emit a snapshot, or
//! emit the graph schema document.

use crate::domain_services::MetricEmitter;
use pgmetrics_domain::error::Result;
use pgmetrics_domain::ports::{MetricSource, SnapshotStateStore};
use pgmetrics_domain::value_objects::MetricSnapshot;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Collection service - drives Fetch → Merge → Emit for one invocation
pub struct CollectionService {
    source: Arc<dyn MetricSource>,
    state_store: Option<Arc<dyn SnapshotStateStore>>,
}

impl CollectionService {
    /// Create a collection service over a metric source
    pub fn new(source: Arc<dyn MetricSource>) -> Self {
        Self {
            source,
            state_store: None,
        }
    }

    /// Persist each emitted snapshot to a state store
    #[must_use]
    pub fn with_state_store(mut self, store: Arc<dyn SnapshotStateStore>) -> Self {
        self.state_store = Some(store);
        self
    }

    /// Fetch a snapshot and write it as metric lines
    ///
    /// Nothing is written when the fetch fails. Returns the number of lines.
    pub fn collect<W: Write>(&self, writer: W, timestamp: i64) -> Result<usize> {
        let snapshot = self.source.fetch_metrics()?;
        let schema = self.source.graph_definitions();
        let prefix = self.source.metric_key_prefix();

        let lines = MetricEmitter::new(writer).emit(&snapshot, &schema, &prefix, timestamp)?;
        info!(prefix = %prefix, lines, "Collection finished");

        self.persist(&snapshot, timestamp);
        Ok(lines)
    }

    /// Write the graph schema document
    pub fn describe<W: Write>(&self, writer: W) -> Result<()> {
        let schema = self.source.graph_definitions();
        let prefix = self.source.metric_key_prefix();
        MetricEmitter::new(writer).emit_schema(&schema, &prefix)
    }

    /// Metric lines are already out, so state failures only warn
    fn persist(&self, snapshot: &MetricSnapshot, timestamp: i64) {
        let Some(store) = &self.state_store else {
            return;
        };
        match store.load() {
            Ok(Some(previous)) => {
                debug!(interval_secs = timestamp - previous.timestamp, "Previous snapshot found");
            }
            Ok(None) => debug!("No previous snapshot"),
            Err(err) => warn!(error = %err, "Failed to read previous snapshot"),
        }
        if let Err(err) = store.save(snapshot, timestamp) {
            warn!(error = %err, "Failed to save snapshot state");
        }
    }
}
