//! Graph schema registry for the built-in metrics

use pgmetrics_domain::value_objects::{
    GraphDefinition, GraphMetric, GraphSchema, GraphUnit, metric_key_prefix, title_case,
};

/// Graph definitions, labelled with the title-cased metric key prefix
///
/// A blank prefix falls back to the default one.
pub fn graph_definitions(prefix: &str) -> GraphSchema {
    let label_prefix = title_case(&metric_key_prefix(prefix));

    GraphSchema::new()
        .with_graph(
            "Count",
            GraphDefinition {
                label: format!("{label_prefix} Count"),
                unit: GraphUnit::Integer,
                metrics: vec![GraphMetric::new("count", "Count")],
            },
        )
        .with_graph(
            "Sum",
            GraphDefinition {
                label: format!("{label_prefix} Sum"),
                unit: GraphUnit::Float,
                metrics: vec![GraphMetric::new("sum", "Sum")],
            },
        )
}
