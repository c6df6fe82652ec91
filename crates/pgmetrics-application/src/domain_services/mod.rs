//! Pipeline Stages
//!
//! Fetcher → Merger → Emitter, each usable on its own.

/// Metric line and schema document emission
pub mod emitter;
/// Query execution against an open session
pub mod fetcher;
/// Fragment merging
pub mod merger;

pub use emitter::{MetricEmitter, MetricLine, render_metric_lines, render_schema_document};
pub use fetcher::{fetch_fragments, fetch_scalar};
pub use merger::merge;
