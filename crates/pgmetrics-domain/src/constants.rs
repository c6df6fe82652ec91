//! Domain layer constants
//!
//! Naming and protocol constants shared by the fetcher, the graph schema
//! registry and the emitter. Process-level defaults (ports, timeouts,
//! environment variable names) live in `pgmetrics_infrastructure::constants`.

// ============================================================================
// METRIC NAMING CONSTANTS
// ============================================================================

/// Metric key prefix used when the configured prefix is empty or blank
pub const DEFAULT_METRIC_KEY_PREFIX: &str = "postgres";

/// Separator between prefix, graph id and metric name in emitted keys
pub const METRIC_KEY_SEPARATOR: char = '.';

// ============================================================================
// PROTOCOL CONSTANTS
// ============================================================================

/// First line of the graph schema document
pub const PLUGIN_META_HEADER: &str = "# mackerel-agent-plugin";

/// Field separator of a metric line
pub const METRIC_FIELD_SEPARATOR: char = '\t';

/// Key under which the state file records the collection time
pub const STATE_LAST_TIME_KEY: &str = "_lastTime";
