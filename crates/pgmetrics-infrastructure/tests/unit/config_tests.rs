//! Configuration loader tests

use figment::Jail;
use pgmetrics_domain::error::Error;
use pgmetrics_domain::value_objects::SslMode;
use pgmetrics_infrastructure::config::ConfigLoader;
use std::path::PathBuf;

#[test]
fn test_defaults_without_sources() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().expect("load defaults");

        assert_eq!(config.connection.host, "localhost");
        assert_eq!(config.connection.port, 5432);
        assert_eq!(config.connection.sslmode, "disable");
        assert_eq!(config.connection.connect_timeout, 5);
        assert!(!config.connection.has_user());
        assert_eq!(config.output.prefix, "postgres");
        assert!(config.output.tempfile.is_none());
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn test_toml_file_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "pgmetrics.toml",
            r#"
                [connection]
                host = "db.internal"
                port = 6432
                user = "monitor"
                sslmode = "prefer"

                [output]
                prefix = "pg-main"
                tempfile = "/var/tmp/pgmetrics.state"
            "#,
        )?;

        let config = ConfigLoader::new()
            .with_config_path("pgmetrics.toml")
            .load()
            .expect("load file");

        assert_eq!(config.connection.host, "db.internal");
        assert_eq!(config.connection.port, 6432);
        assert_eq!(config.connection.user, "monitor");
        assert_eq!(config.output.prefix, "pg-main");
        assert_eq!(
            config.output.tempfile,
            Some(PathBuf::from("/var/tmp/pgmetrics.state"))
        );

        let descriptor = config.connection.to_descriptor().expect("descriptor");
        assert_eq!(descriptor.ssl_mode, SslMode::Prefer);
        Ok(())
    });
}

#[test]
fn test_config_path_is_reported() {
    assert!(ConfigLoader::new().config_path().is_none());

    let loader = ConfigLoader::new().with_config_path("conf/pgmetrics.toml");
    assert_eq!(
        loader.config_path(),
        Some(std::path::Path::new("conf/pgmetrics.toml"))
    );
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "pgmetrics.toml",
            r#"
                [connection]
                port = 6432
            "#,
        )?;
        jail.set_env("PGMETRICS__CONNECTION__PORT", "7432");
        jail.set_env("PGMETRICS__CONNECTION__USER", "from_env");

        let config = ConfigLoader::new()
            .with_config_path("pgmetrics.toml")
            .load()
            .expect("load env");

        assert_eq!(config.connection.port, 7432);
        assert_eq!(config.connection.user, "from_env");
        Ok(())
    });
}

#[test]
fn test_cli_overrides_env() {
    Jail::expect_with(|jail| {
        jail.set_env("PGMETRICS__CONNECTION__HOST", "env-host");

        let config = ConfigLoader::new()
            .with_override("connection.host", "cli-host")
            .with_optional_override("connection.database", Some("app"))
            .with_optional_override::<String>("connection.password", None)
            .load()
            .expect("load overrides");

        assert_eq!(config.connection.host, "cli-host");
        assert_eq!(config.connection.database.as_deref(), Some("app"));
        assert!(config.connection.password.is_none());
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("PLUGIN__OUTPUT__PREFIX", "custom");

        let config = ConfigLoader::new()
            .with_env_prefix("PLUGIN")
            .load()
            .expect("load");

        assert_eq!(config.output.prefix, "custom");
        Ok(())
    });
}

#[test]
fn test_missing_config_file_is_rejected() {
    Jail::expect_with(|_jail| {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent.toml");

        let err = ConfigLoader::new()
            .with_config_path(&missing)
            .load()
            .expect_err("missing file");

        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("absent.toml"));
        Ok(())
    });
}

#[test]
fn test_zero_port_is_rejected() {
    Jail::expect_with(|_jail| {
        let err = ConfigLoader::new()
            .with_override("connection.port", 0)
            .load()
            .expect_err("zero port");
        assert!(err.to_string().contains("Port"));
        Ok(())
    });
}

#[test]
fn test_zero_timeout_is_rejected() {
    Jail::expect_with(|_jail| {
        let err = ConfigLoader::new()
            .with_override("connection.connect_timeout", 0)
            .load()
            .expect_err("zero timeout");
        assert!(err.to_string().contains("timeout"));
        Ok(())
    });
}

#[test]
fn test_unknown_sslmode_is_rejected() {
    Jail::expect_with(|_jail| {
        let err = ConfigLoader::new()
            .with_override("connection.sslmode", "verify-full")
            .load()
            .expect_err("bad sslmode");
        assert!(matches!(err, Error::Configuration { .. }));
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_is_rejected() {
    Jail::expect_with(|_jail| {
        let err = ConfigLoader::new()
            .with_override("logging.level", "loud")
            .load()
            .expect_err("bad level");
        assert!(err.to_string().contains("Invalid log level"));
        Ok(())
    });
}

#[test]
fn test_malformed_value_reports_configuration_error() {
    Jail::expect_with(|jail| {
        jail.set_env("PGMETRICS__CONNECTION__PORT", "not-a-port");

        let err = ConfigLoader::new().load().expect_err("bad port");
        assert!(matches!(err, Error::Configuration { .. }));
        Ok(())
    });
}

#[test]
fn test_descriptor_drops_empty_optionals() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new()
            .with_override("connection.user", "monitor")
            .with_override("connection.password", "")
            .with_override("connection.database", "")
            .with_override("connection.options", "  ")
            .load()
            .expect("load");

        let descriptor = config.connection.to_descriptor().expect("descriptor");
        assert_eq!(descriptor.user, "monitor");
        assert!(descriptor.password.is_none());
        assert!(descriptor.database.is_none());
        assert!(descriptor.extra_options.is_none());
        Ok(())
    });
}

#[test]
fn test_debug_redacts_password() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new()
            .with_override("connection.password", "hunter2")
            .load()
            .expect("load");

        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        Ok(())
    });
}
