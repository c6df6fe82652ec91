//! Configuration types

use crate::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT, DEFAULT_SSLMODE,
};
use pgmetrics_domain::constants::DEFAULT_METRIC_KEY_PREFIX;
use pgmetrics_domain::error::Result;
use pgmetrics_domain::value_objects::{ConnectionDescriptor, SslMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Root configuration of one collector invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Database connection settings
    pub connection: ConnectionConfig,

    /// Metric output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Database connection settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Hostname to log in to
    pub host: String,

    /// Database port
    pub port: u16,

    /// Login role (required to collect metrics)
    pub user: String,

    /// Login password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// TLS mode (disable, prefer, require)
    pub sslmode: String,

    /// Maximum wait for connection, in seconds
    pub connect_timeout: u64,

    /// Database name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// Extra libpq `key=value` options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: String::new(),
            password: None,
            sslmode: DEFAULT_SSLMODE.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT_SECS,
            database: None,
            options: None,
        }
    }
}

impl ConnectionConfig {
    /// Build the descriptor handed to connection providers
    pub fn to_descriptor(&self) -> Result<ConnectionDescriptor> {
        Ok(ConnectionDescriptor {
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            password: self.password.clone().filter(|p| !p.is_empty()),
            ssl_mode: self.sslmode.parse::<SslMode>()?,
            connect_timeout_secs: self.connect_timeout,
            database: self.database.clone().filter(|d| !d.is_empty()),
            extra_options: self.options.clone().filter(|o| !o.trim().is_empty()),
        })
    }

    /// Whether a login role was configured
    pub fn has_user(&self) -> bool {
        !self.user.trim().is_empty()
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("sslmode", &self.sslmode)
            .field("connect_timeout", &self.connect_timeout)
            .field("database", &self.database)
            .field("options", &self.options)
            .finish()
    }
}

/// Metric output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Metric key prefix
    pub prefix: String,

    /// State file for delta tracking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempfile: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_METRIC_KEY_PREFIX.to_string(),
            tempfile: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stderr
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
