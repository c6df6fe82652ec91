//! pgmetrics - Entry Point
//!
//! mackerel-agent plugin collecting PostgreSQL metrics. Metric lines (or the
//! graph schema document) go to stdout; logs and errors go to stderr.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use pgmetrics::Mode;
use pgmetrics::infrastructure::constants::{PASSWORD_ENV_VAR, PLUGIN_META_ENV_VAR};
use pgmetrics::infrastructure::logging::{build_dispatch, log_config_loaded};
use pgmetrics::infrastructure::{CollectorConfig, ConfigLoader};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line interface for pgmetrics
///
/// Flags left unset fall back to the configuration file, then
/// `PGMETRICS__*` environment variables, then built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "pgmetrics")]
#[command(about = "PostgreSQL metrics plugin for mackerel-agent")]
#[command(version)]
pub struct Cli {
    /// Hostname to login to [default: localhost]
    #[arg(long)]
    pub hostname: Option<String>,

    /// Database port [default: 5432]
    #[arg(long)]
    pub port: Option<u16>,

    /// Postgres user (required unless printing graph definitions)
    #[arg(long)]
    pub user: Option<String>,

    /// Database name
    #[arg(long)]
    pub database: Option<String>,

    /// Postgres password
    #[arg(long, env = PASSWORD_ENV_VAR, hide_env_values = true)]
    pub password: Option<String>,

    /// Metric key prefix [default: postgres]
    #[arg(long = "metric-key-prefix")]
    pub metric_key_prefix: Option<String>,

    /// Whether or not to use SSL (disable, prefer, require) [default: disable]
    #[arg(long)]
    pub sslmode: Option<String>,

    /// Maximum wait for connection, in seconds [default: 5]
    #[arg(long = "connect_timeout")]
    pub connect_timeout: Option<u64>,

    /// State file remembering the previous snapshot
    #[arg(long)]
    pub tempfile: Option<PathBuf>,

    /// Print graph definitions instead of metrics
    #[arg(long)]
    pub graphdef: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error) [default: warn]
    #[arg(long = "log-level")]
    pub log_level: Option<String>,
}

impl Cli {
    fn mode(&self) -> Mode {
        let meta_requested =
            std::env::var(PLUGIN_META_ENV_VAR).is_ok_and(|value| !value.is_empty());
        if self.graphdef || meta_requested {
            Mode::GraphDefinitions
        } else {
            Mode::Collect
        }
    }

    fn loader(&self) -> ConfigLoader {
        let mut loader = ConfigLoader::new()
            .with_optional_override("connection.host", self.hostname.as_deref())
            .with_optional_override("connection.port", self.port)
            .with_optional_override("connection.user", self.user.as_deref())
            .with_optional_override("connection.database", self.database.as_deref())
            .with_optional_override("connection.password", self.password.as_deref())
            .with_optional_override("connection.sslmode", self.sslmode.as_deref())
            .with_optional_override("connection.connect_timeout", self.connect_timeout)
            .with_optional_override("output.prefix", self.metric_key_prefix.as_deref())
            .with_optional_override("output.tempfile", self.tempfile.as_deref())
            .with_optional_override("logging.level", self.log_level.as_deref());
        if let Some(path) = &self.config {
            loader = loader.with_config_path(path);
        }
        loader
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mode = cli.mode();

    let loader = cli.loader();
    let config = match loader.load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if mode == Mode::Collect && !config.connection.has_user() {
        eprintln!("error: user is required");
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::FAILURE;
    }

    match execute(&loader, &config, mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(loader: &ConfigLoader, config: &CollectorConfig, mode: Mode) -> anyhow::Result<()> {
    let dispatch = build_dispatch(&config.logging).context("Failed to initialize logging")?;

    tracing::dispatcher::with_default(&dispatch, || {
        log_config_loaded(loader.config_path());
        let timestamp = chrono::Utc::now().timestamp();
        let stdout = std::io::stdout().lock();
        pgmetrics::run(config, mode, stdout, timestamp).context("Collection failed")
    })
}
