//! Emitter
//!
//! Serializes a snapshot and its graph schema into the monitoring agent's
//! protocol:
//!
//! - metric lines: `<prefix>.<graphId>.<metric>\t<value>\t<unixSeconds>`
//! - schema document: a `# mackerel-agent-plugin` header line followed by a
//!   JSON object `{"graphs": {"<prefix>.<graphId>": {...}}}`
//!
//! Output is fully rendered before the first byte is written.

use pgmetrics_domain::constants::{
    METRIC_FIELD_SEPARATOR, METRIC_KEY_SEPARATOR, PLUGIN_META_HEADER,
};
use pgmetrics_domain::error::{Error, Result};
use pgmetrics_domain::value_objects::{GraphDefinition, GraphSchema, MetricSnapshot, MetricValue};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use tracing::{debug, warn};

/// One record of the metric protocol
#[derive(Debug, Clone, PartialEq)]
pub struct MetricLine {
    /// Fully qualified metric key
    pub key: String,
    /// Metric value
    pub value: MetricValue,
    /// Unix timestamp in seconds
    pub timestamp: i64,
}

impl fmt::Display for MetricLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{key}{sep}{value}{sep}{ts}",
            key = self.key,
            value = self.value,
            ts = self.timestamp,
            sep = METRIC_FIELD_SEPARATOR,
        )
    }
}

/// Schema document body
#[derive(Serialize)]
struct PluginMeta<'a> {
    graphs: BTreeMap<String, &'a GraphDefinition>,
}

fn qualify(prefix: &str, parts: &[&str]) -> String {
    let mut key = prefix.to_string();
    for part in parts {
        key.push(METRIC_KEY_SEPARATOR);
        key.push_str(part);
    }
    key
}

/// Build the metric lines for a snapshot
///
/// Graphs are visited in id order and their metrics in display order. Keys
/// that no graph references are appended as `<prefix>.<metric>` so no value
/// is ever dropped.
pub fn render_metric_lines(
    snapshot: &MetricSnapshot,
    schema: &GraphSchema,
    prefix: &str,
    timestamp: i64,
) -> Vec<MetricLine> {
    let mut lines = Vec::with_capacity(snapshot.len());
    for (graph_id, graph) in schema {
        for metric in &graph.metrics {
            let Some(value) = snapshot.get(&metric.name) else {
                debug!(graph = %graph_id, metric = %metric.name, "Metric absent from snapshot");
                continue;
            };
            lines.push(MetricLine {
                key: qualify(prefix, &[graph_id.as_str(), metric.name.as_str()]),
                value,
                timestamp,
            });
        }
    }

    for (key, value) in snapshot {
        if schema.references(key) {
            continue;
        }
        warn!(metric = %key, "Metric not referenced by any graph, emitting raw key");
        lines.push(MetricLine {
            key: qualify(prefix, &[key.as_str()]),
            value: *value,
            timestamp,
        });
    }

    lines
}

/// Build the schema document
pub fn render_schema_document(schema: &GraphSchema, prefix: &str) -> Result<String> {
    let meta = PluginMeta {
        graphs: schema
            .iter()
            .map(|(graph_id, graph)| (qualify(prefix, &[graph_id.as_str()]), graph))
            .collect(),
    };
    let body = serde_json::to_string(&meta)?;
    Ok(format!("{PLUGIN_META_HEADER}\n{body}\n"))
}

/// Writes protocol output to a transport
pub struct MetricEmitter<W: Write> {
    writer: W,
}

impl<W: Write> MetricEmitter<W> {
    /// Create an emitter over a writer (stdout in production)
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Emit one line per snapshot metric, returning the number of lines
    pub fn emit(
        &mut self,
        snapshot: &MetricSnapshot,
        schema: &GraphSchema,
        prefix: &str,
        timestamp: i64,
    ) -> Result<usize> {
        let lines = render_metric_lines(snapshot, schema, prefix, timestamp);
        let mut payload = String::new();
        for line in &lines {
            payload.push_str(&line.to_string());
            payload.push('\n');
        }
        self.write_payload(&payload)?;
        debug!(lines = lines.len(), "Metrics emitted");
        Ok(lines.len())
    }

    /// Emit the schema document
    pub fn emit_schema(&mut self, schema: &GraphSchema, prefix: &str) -> Result<()> {
        let document = render_schema_document(schema, prefix)?;
        self.write_payload(&document)?;
        debug!(graphs = schema.len(), "Graph definitions emitted");
        Ok(())
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_payload(&mut self, payload: &str) -> Result<()> {
        self.writer
            .write_all(payload.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(Error::transport_write)
    }
}
