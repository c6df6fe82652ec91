//! PostgreSQL provider behaviour without a running server

use pgmetrics_domain::{ConnectionDescriptor, Error, SslMode};
use pgmetrics_providers::ConnectionProvider;
use pgmetrics_providers::postgres::PostgresConnectionProvider;

fn descriptor(port: u16) -> ConnectionDescriptor {
    ConnectionDescriptor {
        host: "127.0.0.1".to_string(),
        port,
        user: "monitor".to_string(),
        password: Some("secret".to_string()),
        ssl_mode: SslMode::Disable,
        connect_timeout_secs: 1,
        database: Some("app".to_string()),
        extra_options: None,
    }
}

#[test]
fn test_provider_creation_does_not_connect() {
    let provider = PostgresConnectionProvider::new(&descriptor(1)).expect("valid descriptor");
    assert_eq!(provider.target(), "127.0.0.1:1");
    assert_eq!(provider.provider_name(), "postgres");
}

#[test]
fn test_unknown_extra_option_is_configuration_error() {
    let desc = ConnectionDescriptor {
        extra_options: Some("no_such_option=1".to_string()),
        ..descriptor(5432)
    };
    let result = PostgresConnectionProvider::new(&desc);
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_unreachable_server_is_connection_error() {
    let provider = PostgresConnectionProvider::new(&descriptor(1)).expect("valid descriptor");
    match provider.connect() {
        Err(Error::Connection { message, .. }) => {
            assert!(message.contains("127.0.0.1:1"), "message: {message}");
            assert!(!message.contains("secret"));
        }
        Err(other) => panic!("Expected Connection error, got {other:?}"),
        Ok(_) => panic!("Expected Connection error, got a session"),
    }
}
