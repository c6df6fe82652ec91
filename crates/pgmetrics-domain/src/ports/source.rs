//! Metric Source Port
//!
//! Capability contract of a data source adapter: produce a snapshot and
//! describe how it is graphed. The emitter only ever talks to this trait,
//! so another data source can be plugged in without touching the protocol.

use crate::error::Result;
use crate::value_objects::{GraphSchema, MetricSnapshot};

/// A data source able to produce one metric snapshot per call
pub trait MetricSource: Send + Sync {
    /// Namespace prefix for emitted metric keys, never blank
    fn metric_key_prefix(&self) -> String;

    /// Collect a complete snapshot, or fail without a partial one
    fn fetch_metrics(&self) -> Result<MetricSnapshot>;

    /// Static graph definitions for the snapshot's keys
    fn graph_definitions(&self) -> GraphSchema;
}
