//! Use Cases
//!
//! - [`QueryMetricSource`]: a `MetricSource` backed by any connection provider
//! - [`CollectionService`]: one invocation of the collector (metrics or graph definitions)

/// Collection and graph definition use case
pub mod collection_service;
/// Query-driven metric source
pub mod query_metric_source;

pub use collection_service::CollectionService;
pub use query_metric_source::QueryMetricSource;
