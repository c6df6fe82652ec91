//! Graph Schema Value Objects
//!
//! Static display metadata telling the monitoring agent how metric keys are
//! grouped into graphs.

use crate::constants::DEFAULT_METRIC_KEY_PREFIX;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Unit a graph's values are displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphUnit {
    /// Floating point numbers
    #[serde(rename = "float")]
    Float,
    /// Whole numbers
    #[serde(rename = "integer")]
    Integer,
    /// Percentages (0-100)
    #[serde(rename = "percentage")]
    Percentage,
    /// Seconds
    #[serde(rename = "seconds")]
    Seconds,
    /// Milliseconds
    #[serde(rename = "milliseconds")]
    Milliseconds,
    /// Bytes
    #[serde(rename = "bytes")]
    Bytes,
    /// Bytes per second
    #[serde(rename = "bytes/sec")]
    BytesPerSecond,
    /// Bits per second
    #[serde(rename = "bits/sec")]
    BitsPerSecond,
    /// I/O operations per second
    #[serde(rename = "iops")]
    Iops,
}

/// One metric line inside a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphMetric {
    /// Metric key as produced by the fetcher
    pub name: String,
    /// Display label
    pub label: String,
}

impl GraphMetric {
    /// Create a graph metric
    pub fn new<N: Into<String>, L: Into<String>>(name: N, label: L) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

/// Value Object: Graph Definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDefinition {
    /// Display label, already decorated with the title-cased prefix
    pub label: String,
    /// Display unit
    pub unit: GraphUnit,
    /// Member metrics in display order
    pub metrics: Vec<GraphMetric>,
}

/// Value Object: Graph Schema
///
/// Mapping from graph id to definition, ordered by graph id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphSchema(BTreeMap<String, GraphDefinition>);

impl GraphSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style graph registration
    #[must_use]
    pub fn with_graph<S: Into<String>>(mut self, graph_id: S, definition: GraphDefinition) -> Self {
        self.0.insert(graph_id.into(), definition);
        self
    }

    /// Look up a graph
    pub fn get(&self, graph_id: &str) -> Option<&GraphDefinition> {
        self.0.get(graph_id)
    }

    /// Number of graphs
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the schema has no graphs
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate graphs ordered by id
    pub fn iter(&self) -> btree_map::Iter<'_, String, GraphDefinition> {
        self.0.iter()
    }

    /// Every metric name referenced by any graph
    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.0
            .values()
            .flat_map(|graph| graph.metrics.iter().map(|m| m.name.as_str()))
    }

    /// Id of the first graph (in id order) that references the metric
    pub fn graph_for_metric(&self, metric: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, graph)| graph.metrics.iter().any(|m| m.name == metric))
            .map(|(graph_id, _)| graph_id.as_str())
    }

    /// Whether any graph references the metric
    pub fn references(&self, metric: &str) -> bool {
        self.graph_for_metric(metric).is_some()
    }
}

impl<'a> IntoIterator for &'a GraphSchema {
    type Item = (&'a String, &'a GraphDefinition);
    type IntoIter = btree_map::Iter<'a, String, GraphDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Resolve the metric key prefix, falling back to the default when blank
pub fn metric_key_prefix(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_METRIC_KEY_PREFIX.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Upper-case the first letter of every word
///
/// ASCII letters, digits and underscores continue a word and any other ASCII
/// character starts a new one. Outside ASCII only whitespace separates
/// words. `"pg-main"` becomes `"Pg-Main"`, `"my_pg"` becomes `"My_pg"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = is_word_separator(ch);
    }
    out
}

fn is_word_separator(ch: char) -> bool {
    if ch.is_ascii() {
        !(ch.is_ascii_alphanumeric() || ch == '_')
    } else {
        ch.is_whitespace()
    }
}
