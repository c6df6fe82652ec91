//! Invocation wiring
//!
//! Builds the PostgreSQL-backed collection service from a loaded
//! configuration and runs it in the requested mode.

use pgmetrics_application::{CollectionService, QueryMetricSource};
use pgmetrics_domain::error::Result;
use pgmetrics_domain::value_objects::metric_key_prefix;
use pgmetrics_infrastructure::CollectorConfig;
use pgmetrics_providers::postgres::{
    PostgresConnectionProvider, builtin_query_set, graph_definitions,
};
use pgmetrics_providers::state::FileStateStore;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};

/// What one invocation prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fetch a snapshot and print metric lines
    Collect,
    /// Print the graph schema document without connecting
    GraphDefinitions,
}

/// Build the collection service for a configuration
///
/// No connection is attempted here.
pub fn build_service(config: &CollectorConfig) -> Result<CollectionService> {
    let descriptor = config.connection.to_descriptor()?;
    let provider = PostgresConnectionProvider::new(&descriptor)?;
    debug!(target_addr = provider.target(), descriptor = ?descriptor, "Provider configured");

    let prefix = metric_key_prefix(&config.output.prefix);
    let source = QueryMetricSource::new(
        Arc::new(provider),
        builtin_query_set()?,
        graph_definitions(&prefix),
        &prefix,
    )?;

    let mut service = CollectionService::new(Arc::new(source));
    if let Some(path) = &config.output.tempfile {
        debug!(path = %path.display(), "Snapshot state file enabled");
        service = service.with_state_store(Arc::new(FileStateStore::new(path)));
    }
    Ok(service)
}

/// Run one invocation, writing protocol output to `writer`
///
/// On failure nothing has been written.
pub fn run<W: Write>(
    config: &CollectorConfig,
    mode: Mode,
    writer: W,
    timestamp: i64,
) -> Result<()> {
    let service = build_service(config)?;
    match mode {
        Mode::GraphDefinitions => service.describe(writer),
        Mode::Collect => {
            let lines = service.collect(writer, timestamp)?;
            info!(lines, timestamp, "Metrics written");
            Ok(())
        }
    }
}
