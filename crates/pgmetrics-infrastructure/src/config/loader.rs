//! Configuration loader
//!
//! Handles loading configuration from a TOML file, environment variables,
//! command line overrides and default values, using Figment.

use crate::config::CollectorConfig;
use crate::constants::{CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use pgmetrics_domain::error::{Error, Result};
use pgmetrics_domain::value_objects::SslMode;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,

    /// Command line values, merged last
    overrides: Figment,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
            overrides: Figment::new(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Override a dotted key (e.g. `connection.port`)
    #[must_use]
    pub fn with_override<V: Serialize>(mut self, key: &str, value: V) -> Self {
        self.overrides = self.overrides.merge(Serialized::default(key, value));
        self
    }

    /// Override a dotted key only when a value is present
    #[must_use]
    pub fn with_optional_override<V: Serialize>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with_override(key, value),
            None => self,
        }
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load configuration from all sources
    pub fn load(&self) -> Result<CollectorConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(CollectorConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                return Err(Error::config(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(config_path));
        }

        figment = figment
            .merge(
                Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                    .split(CONFIG_ENV_SEPARATOR),
            )
            .merge(self.overrides.clone());

        let config: CollectorConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
///
/// The login role is not checked here: graph definitions can be printed
/// without one.
fn validate_config(config: &CollectorConfig) -> Result<()> {
    validate_connection_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_connection_config(config: &CollectorConfig) -> Result<()> {
    let connection = &config.connection;
    if connection.host.trim().is_empty() {
        return Err(Error::config("Host cannot be empty"));
    }
    if connection.port == 0 {
        return Err(Error::config("Port cannot be 0"));
    }
    if connection.connect_timeout == 0 {
        return Err(Error::config("Connect timeout cannot be 0"));
    }
    connection.sslmode.parse::<SslMode>()?;
    Ok(())
}
