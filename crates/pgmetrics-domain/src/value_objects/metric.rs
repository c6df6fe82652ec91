//! Metric Value Objects
//!
//! Scalar values produced by the fetcher, the per-query fragments that carry
//! them, and the merged snapshot handed to the emitter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// Numeric representation a query definition promises for its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Whole numbers, printed without a fractional part
    Integer,
    /// Floating point numbers, printed with at least one fractional digit
    Float,
}

/// Value Object: Scalar Metric Value
///
/// A single number read from a query result. Integers and floats are kept
/// apart so the wire format can print `5` for a row count and `42.0` for an
/// aggregated sum.
///
/// ## Example
///
/// ```rust
/// use pgmetrics_domain::MetricValue;
///
/// assert_eq!(MetricValue::Integer(5).to_string(), "5");
/// assert_eq!(MetricValue::Float(42.0).to_string(), "42.0");
/// assert_eq!(MetricValue::Float(0.25).to_string(), "0.25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Whole number value
    Integer(i64),
    /// Floating point value
    Float(f64),
}

impl MetricValue {
    /// Kind of this value
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
        }
    }

    /// Convert into the requested kind
    ///
    /// Floats only become integers when they are finite and integral.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn coerce(self, kind: ValueKind) -> Option<Self> {
        match (self, kind) {
            (Self::Integer(v), ValueKind::Integer) => Some(Self::Integer(v)),
            (Self::Integer(v), ValueKind::Float) => Some(Self::Float(v as f64)),
            (Self::Float(v), ValueKind::Float) => v.is_finite().then_some(Self::Float(v)),
            (Self::Float(v), ValueKind::Integer) => {
                let in_range = v >= i64::MIN as f64 && v < i64::MAX as f64;
                (v.is_finite() && v.fract() == 0.0 && in_range).then_some(Self::Integer(v as i64))
            }
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) if v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Partial key/value mapping produced by one query, before merging
#[derive(Debug, Clone, PartialEq)]
pub struct MetricFragment {
    /// Name of the query definition that produced the fragment
    pub query: String,
    /// Values keyed by metric name
    pub values: BTreeMap<String, MetricValue>,
}

impl MetricFragment {
    /// Create an empty fragment for a query
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
            values: BTreeMap::new(),
        }
    }

    /// Builder-style insertion
    #[must_use]
    pub fn with_value<K: Into<String>, V: Into<MetricValue>>(mut self, key: K, value: V) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

/// Value Object: Metric Snapshot
///
/// The complete flat key/value result of one collection cycle. Keys are kept
/// ordered so emission and tests are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSnapshot(BTreeMap<String, MetricValue>);

impl MetricSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced
    pub fn insert<K: Into<String>>(&mut self, key: K, value: MetricValue) -> Option<MetricValue> {
        self.0.insert(key.into(), value)
    }

    /// Look up a metric value
    pub fn get(&self, key: &str) -> Option<MetricValue> {
        self.0.get(key).copied()
    }

    /// Number of metrics
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no metric was collected
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate metrics in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, MetricValue> {
        self.0.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, MetricValue)> for MetricSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, MetricValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<'a> IntoIterator for &'a MetricSnapshot {
    type Item = (&'a String, &'a MetricValue);
    type IntoIter = btree_map::Iter<'a, String, MetricValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
