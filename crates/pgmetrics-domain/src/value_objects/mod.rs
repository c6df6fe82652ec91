//! Domain Value Objects
//!
//! Immutable data carried through one Fetch → Merge → Emit cycle, plus the
//! static query and graph definitions that shape it.

/// Connection descriptor and TLS mode
pub mod connection;
/// Graph schema definitions
pub mod graph;
/// Metric values, fragments and snapshots
pub mod metric;
/// Query definitions and query sets
pub mod query;

pub use connection::{ConnectionDescriptor, SslMode};
pub use graph::{
    GraphDefinition, GraphMetric, GraphSchema, GraphUnit, metric_key_prefix, title_case,
};
pub use metric::{MetricFragment, MetricSnapshot, MetricValue, ValueKind};
pub use query::{QueryDefinition, QuerySet};
