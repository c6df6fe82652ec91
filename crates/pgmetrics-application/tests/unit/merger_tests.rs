//! Merge properties

use pgmetrics_application::merge;
use pgmetrics_domain::{MetricFragment, MetricValue};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn fragments_from(groups: &[Vec<(String, i64)>]) -> Vec<MetricFragment> {
    groups
        .iter()
        .enumerate()
        .map(|(index, pairs)| {
            pairs.iter().fold(
                MetricFragment::new(format!("q{index}")),
                |fragment, (key, value)| fragment.with_value(key.as_str(), *value),
            )
        })
        .collect()
}

#[test]
fn test_last_write_wins_across_fragments() {
    let fragments = vec![
        MetricFragment::new("first").with_value("a", 1_i64),
        MetricFragment::new("second").with_value("a", 2_i64),
    ];
    let snapshot = merge(fragments);
    assert_eq!(snapshot.get("a"), Some(MetricValue::Integer(2)));
    assert_eq!(snapshot.len(), 1);
}

proptest! {
    // Disjoint fragments merge into their union, whatever the order
    #[test]
    fn test_disjoint_merge_is_union(
        entries in prop::collection::btree_map("[a-z]{1,8}", any::<i64>(), 0..24),
        split in 1usize..5,
    ) {
        let pairs: Vec<(String, i64)> = entries.clone().into_iter().collect();
        let groups: Vec<Vec<(String, i64)>> =
            pairs.chunks(split).map(<[(String, i64)]>::to_vec).collect();

        let forward = merge(fragments_from(&groups));
        let mut reversed_groups = groups.clone();
        reversed_groups.reverse();
        let backward = merge(fragments_from(&reversed_groups));

        let expected: BTreeMap<String, MetricValue> = entries
            .into_iter()
            .map(|(k, v)| (k, MetricValue::Integer(v)))
            .collect();
        let actual: BTreeMap<String, MetricValue> =
            forward.iter().map(|(k, v)| (k.clone(), *v)).collect();

        prop_assert_eq!(&actual, &expected);
        prop_assert_eq!(forward, backward);
    }

    // The last fragment carrying a key decides its value
    #[test]
    fn test_overlapping_merge_keeps_last(values in prop::collection::vec(any::<i64>(), 1..10)) {
        let fragments: Vec<MetricFragment> = values
            .iter()
            .enumerate()
            .map(|(i, v)| MetricFragment::new(format!("q{i}")).with_value("shared", *v))
            .collect();
        let snapshot = merge(fragments);
        let last = *values.last().expect("non-empty");
        prop_assert_eq!(snapshot.get("shared"), Some(MetricValue::Integer(last)));
    }
}
