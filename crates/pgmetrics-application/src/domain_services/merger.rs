//! Merger
//!
//! Folds per-query fragments into one flat snapshot.

use pgmetrics_domain::value_objects::{MetricFragment, MetricSnapshot};

/// Merge fragments in order; a later fragment overwrites an earlier key
///
/// Pure: the result depends only on fragment order and content.
pub fn merge<I>(fragments: I) -> MetricSnapshot
where
    I: IntoIterator<Item = MetricFragment>,
{
    let mut snapshot = MetricSnapshot::new();
    for fragment in fragments {
        for (key, value) in fragment.values {
            snapshot.insert(key, value);
        }
    }
    snapshot
}
