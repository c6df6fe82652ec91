//! Query Value Objects
//!
//! The fixed, ordered list of aggregate queries a collection cycle runs.

use crate::error::{Error, Result};
use crate::value_objects::metric::{MetricValue, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Value Object: Query Definition
///
/// A named aggregate statement producing zero or one scalar. The default
/// value is used when the statement returns no decodable row, and its kind
/// decides how a decoded column is represented.
///
/// ## Example
///
/// ```rust
/// use pgmetrics_domain::{MetricValue, QueryDefinition, ValueKind};
///
/// let query = QueryDefinition::new(
///     "count",
///     "select count(*) from sample",
///     "count",
///     MetricValue::Integer(0),
/// );
/// assert_eq!(query.kind(), ValueKind::Integer);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDefinition {
    /// Query name, used in logs and errors
    pub name: String,
    /// SQL statement returning a single scalar column
    pub statement: String,
    /// Metric key the scalar is stored under
    pub result_key: String,
    /// Value used when no row is returned
    pub default_value: MetricValue,
}

impl QueryDefinition {
    /// Create a query definition
    pub fn new<N, S, K>(name: N, statement: S, result_key: K, default_value: MetricValue) -> Self
    where
        N: Into<String>,
        S: Into<String>,
        K: Into<String>,
    {
        Self {
            name: name.into(),
            statement: statement.into(),
            result_key: result_key.into(),
            default_value,
        }
    }

    /// Kind every decoded value is coerced to
    pub const fn kind(&self) -> ValueKind {
        self.default_value.kind()
    }
}

/// Value Object: Query Set
///
/// Ordered, validated collection of query definitions. Result keys are unique
/// across the set, so merging its fragments never overwrites a value.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySet {
    queries: Vec<QueryDefinition>,
}

impl QuerySet {
    /// Build a query set, rejecting blank fields and colliding result keys
    pub fn new(queries: Vec<QueryDefinition>) -> Result<Self> {
        let mut seen = HashSet::new();
        for query in &queries {
            if query.name.trim().is_empty() {
                return Err(Error::invalid_argument("query name cannot be empty"));
            }
            if query.statement.trim().is_empty() {
                return Err(Error::invalid_argument(format!(
                    "query '{}' has an empty statement",
                    query.name
                )));
            }
            if query.result_key.trim().is_empty() {
                return Err(Error::invalid_argument(format!(
                    "query '{}' has an empty result key",
                    query.name
                )));
            }
            if !seen.insert(query.result_key.as_str()) {
                return Err(Error::invalid_argument(format!(
                    "result key '{}' of query '{}' is already produced by another query",
                    query.result_key, query.name
                )));
            }
        }
        Ok(Self { queries })
    }

    /// Iterate definitions in execution order
    pub fn iter(&self) -> std::slice::Iter<'_, QueryDefinition> {
        self.queries.iter()
    }

    /// Number of queries
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Every metric key the set can produce
    pub fn result_keys(&self) -> impl Iterator<Item = &str> {
        self.queries.iter().map(|q| q.result_key.as_str())
    }
}

impl<'a> IntoIterator for &'a QuerySet {
    type Item = &'a QueryDefinition;
    type IntoIter = std::slice::Iter<'a, QueryDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.queries.iter()
    }
}
