//! Query Metric Source
//!
//! Generic [`MetricSource`] that runs a fixed query set over a single session
//! opened from a [`ConnectionProvider`](pgmetrics_domain::ports::ConnectionProvider).

use crate::domain_services::{fetch_fragments, merge};
use pgmetrics_domain::error::{Error, Result};
use pgmetrics_domain::ports::{MetricSource, SharedConnectionProvider};
use pgmetrics_domain::value_objects::{GraphSchema, MetricSnapshot, QuerySet, metric_key_prefix};
use std::collections::HashSet;
use tracing::{debug, error};

/// Metric source running a query set against one connection per fetch
pub struct QueryMetricSource {
    provider: SharedConnectionProvider,
    queries: QuerySet,
    schema: GraphSchema,
    prefix: String,
}

impl QueryMetricSource {
    /// Create a source, checking that every graphed metric can be produced
    pub fn new(
        provider: SharedConnectionProvider,
        queries: QuerySet,
        schema: GraphSchema,
        prefix: &str,
    ) -> Result<Self> {
        let producible: HashSet<&str> = queries.result_keys().collect();
        if let Some(orphan) = schema.metric_names().find(|name| !producible.contains(name)) {
            return Err(Error::invalid_argument(format!(
                "graph metric '{orphan}' is not produced by any query"
            )));
        }
        Ok(Self {
            provider,
            queries,
            schema,
            prefix: metric_key_prefix(prefix),
        })
    }
}

impl MetricSource for QueryMetricSource {
    fn metric_key_prefix(&self) -> String {
        self.prefix.clone()
    }

    fn fetch_metrics(&self) -> Result<MetricSnapshot> {
        let mut session = self.provider.connect().inspect_err(|err| {
            error!(provider = self.provider.provider_name(), error = %err, "FetchMetrics");
        })?;
        let fragments = fetch_fragments(session.as_mut(), &self.queries)?;
        drop(session);

        let snapshot = merge(fragments);
        debug!(
            provider = self.provider.provider_name(),
            metrics = snapshot.len(),
            "Snapshot collected"
        );
        Ok(snapshot)
    }

    fn graph_definitions(&self) -> GraphSchema {
        self.schema.clone()
    }
}
