//! Built-in query set

use pgmetrics_domain::error::Result;
use pgmetrics_domain::value_objects::{MetricValue, QueryDefinition, QuerySet};

/// Row count of the sample table
pub const COUNT_STATEMENT: &str = "select count(*) from sample";

/// Sum of the sample table's second column
pub const SUM_STATEMENT: &str = "select sum(column2) from sample";

/// Queries run on every collection, in execution order
pub fn builtin_query_set() -> Result<QuerySet> {
    QuerySet::new(vec![
        QueryDefinition::new("count", COUNT_STATEMENT, "count", MetricValue::Integer(0)),
        QueryDefinition::new("sum", SUM_STATEMENT, "sum", MetricValue::Float(0.0)),
    ])
}
