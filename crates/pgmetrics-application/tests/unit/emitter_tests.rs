//! Protocol rendering and transport failures

use crate::test_utils::{BrokenPipe, sample_schema};
use pgmetrics_application::{MetricEmitter, render_metric_lines, render_schema_document};
use pgmetrics_domain::{Error, MetricSnapshot, MetricValue};

fn snapshot() -> MetricSnapshot {
    [
        ("count", MetricValue::Integer(5)),
        ("sum", MetricValue::Float(42.0)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_emit_writes_one_line_per_metric() {
    let mut emitter = MetricEmitter::new(Vec::new());
    let lines = emitter
        .emit(&snapshot(), &sample_schema(), "postgres", 1_700_000_000)
        .expect("emit");
    assert_eq!(lines, 2);

    let output = String::from_utf8(emitter.into_inner()).expect("utf8");
    assert_eq!(
        output,
        "postgres.Count.count\t5\t1700000000\npostgres.Sum.sum\t42.0\t1700000000\n"
    );
}

#[test]
fn test_unassigned_metric_is_still_emitted() {
    let mut snapshot = snapshot();
    snapshot.insert("orphan", MetricValue::Float(0.5));

    let lines = render_metric_lines(&snapshot, &sample_schema(), "pg", 10);
    let keys: Vec<&str> = lines.iter().map(|l| l.key.as_str()).collect();
    assert_eq!(keys, vec!["pg.Count.count", "pg.Sum.sum", "pg.orphan"]);
    assert_eq!(lines[2].to_string(), "pg.orphan\t0.5\t10");
}

#[test]
fn test_graph_metric_missing_from_snapshot_is_skipped() {
    let snapshot: MetricSnapshot = [("count", MetricValue::Integer(1))].into_iter().collect();
    let lines = render_metric_lines(&snapshot, &sample_schema(), "postgres", 0);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].key, "postgres.Count.count");
}

#[test]
fn test_schema_document_layout() {
    let document = render_schema_document(&sample_schema(), "postgres").expect("render");
    let mut parts = document.splitn(2, '\n');
    assert_eq!(parts.next(), Some("# mackerel-agent-plugin"));

    let json: serde_json::Value =
        serde_json::from_str(parts.next().expect("json body").trim()).expect("valid json");
    let count = &json["graphs"]["postgres.Count"];
    assert_eq!(count["label"], "Postgres Count");
    assert_eq!(count["unit"], "integer");
    assert_eq!(count["metrics"][0]["name"], "count");
    assert_eq!(count["metrics"][0]["label"], "Count");
    assert_eq!(json["graphs"]["postgres.Sum"]["unit"], "float");
}

#[test]
fn test_broken_pipe_is_transport_error() {
    let mut emitter = MetricEmitter::new(BrokenPipe);
    let err = emitter
        .emit(&snapshot(), &sample_schema(), "postgres", 0)
        .expect_err("write must fail");
    assert!(matches!(err, Error::TransportWrite { .. }));

    let err = emitter
        .emit_schema(&sample_schema(), "postgres")
        .expect_err("write must fail");
    assert!(matches!(err, Error::TransportWrite { .. }));
}
