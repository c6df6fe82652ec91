//! Unit tests for domain error types

use pgmetrics_domain::Error;

#[test]
fn test_connection_error() {
    let error = Error::connection("server closed the connection");
    match &error {
        Error::Connection { message, source } => {
            assert_eq!(message, "server closed the connection");
            assert!(source.is_none());
        }
        _ => panic!("Expected Connection error"),
    }
    assert!(!error.is_recoverable());
}

#[test]
fn test_query_execution_error_display() {
    let error = Error::query_execution("count", "relation \"sample\" does not exist");
    let display_str = format!("{error}");
    assert!(display_str.contains("'count'"));
    assert!(display_str.contains("does not exist"));
}

#[test]
fn test_row_decode_is_recoverable() {
    let error = Error::row_decode("unsupported column type text");
    assert!(error.is_recoverable());
}

#[test]
fn test_transport_write_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error = Error::transport_write(io);
    match &error {
        Error::TransportWrite { source } => {
            assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe);
        }
        _ => panic!("Expected TransportWrite error"),
    }
    assert!(!error.is_recoverable());
}

#[test]
fn test_config_error() {
    let error = Error::config("port cannot be 0");
    match error {
        Error::Configuration { message, .. } => assert_eq!(message, "port cannot be 0"),
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
    let error: Error = json_err.into();
    assert!(matches!(error, Error::Json { .. }));
}
