//! Structured logging with tracing
//!
//! Standard output carries the agent protocol, so every log record goes to
//! standard error (and optionally a daily rolling file). The subscriber is
//! returned as a [`Dispatch`] that callers scope to one invocation with
//! [`tracing::dispatcher::with_default`] instead of installing it globally.

use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILE_NAME, LOG_ENV_VAR};
use crate::error_ext::ErrorContext;
use pgmetrics_domain::error::{Error, Result};
use std::path::Path;
use tracing::{Dispatch, Level, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Build the logging dispatcher for the provided configuration
///
/// `PGMETRICS_LOG` takes precedence over the configured level when it holds
/// a valid filter directive.
pub fn build_dispatch(config: &LoggingConfig) -> Result<Dispatch> {
    parse_log_level(&config.level)?;

    let mut layers: Vec<BoxedLayer> = Vec::with_capacity(2);
    layers.push(stderr_layer(config));
    if let Some(path) = &config.file_output {
        layers.push(file_layer(config, path)?);
    }

    Ok(Dispatch::new(Registry::default().with(layers)))
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level))
}

fn stderr_layer(config: &LoggingConfig) -> BoxedLayer {
    let filter = env_filter(&config.level);
    if config.json_format {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter)
            .boxed()
    }
}

fn file_layer(config: &LoggingConfig, path: &Path) -> Result<BoxedLayer> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory).io_context(format!(
        "Failed to create log directory {}",
        directory.display()
    ))?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_LOG_FILE_NAME);
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name)
        .build(directory)
        .io_context(format!("Failed to open log file {}", path.display()))?;

    let filter = env_filter(&config.level);
    let layer = if config.json_format {
        fmt::layer()
            .json()
            .with_writer(appender)
            .with_ansi(false)
            .with_target(true)
            .with_filter(filter)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .with_target(true)
            .with_filter(filter)
            .boxed()
    };
    Ok(layer)
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: Option<&Path>) {
    match config_path {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("Configuration loaded from defaults and environment"),
    }
}

