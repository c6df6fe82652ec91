//! Unit tests for query definitions and query sets

use pgmetrics_domain::{Error, MetricValue, QueryDefinition, QuerySet, ValueKind};

fn count_query() -> QueryDefinition {
    QueryDefinition::new(
        "count",
        "select count(*) from sample",
        "count",
        MetricValue::Integer(0),
    )
}

fn sum_query() -> QueryDefinition {
    QueryDefinition::new(
        "sum",
        "select sum(column2) from sample",
        "sum",
        MetricValue::Float(0.0),
    )
}

#[test]
fn test_query_set_preserves_order() {
    let set = QuerySet::new(vec![count_query(), sum_query()]).expect("valid set");
    let names: Vec<&str> = set.iter().map(|q| q.name.as_str()).collect();
    assert_eq!(names, vec!["count", "sum"]);
    assert_eq!(set.result_keys().collect::<Vec<_>>(), vec!["count", "sum"]);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_kind_follows_default_value() {
    assert_eq!(count_query().kind(), ValueKind::Integer);
    assert_eq!(sum_query().kind(), ValueKind::Float);
}

#[test]
fn test_duplicate_result_key_rejected() {
    let mut clash = sum_query();
    clash.result_key = "count".to_string();
    let err = QuerySet::new(vec![count_query(), clash]).expect_err("duplicate key");
    match err {
        Error::InvalidArgument { message } => {
            assert!(message.contains("'count'"), "message: {message}");
        }
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_blank_statement_rejected() {
    let mut blank = count_query();
    blank.statement = "   ".to_string();
    assert!(QuerySet::new(vec![blank]).is_err());
}

#[test]
fn test_empty_set_is_valid() {
    let set = QuerySet::new(Vec::new()).expect("empty set");
    assert!(set.is_empty());
}
