//! Connection Descriptor
//!
//! Opaque description of how to reach the data source. Built by the
//! configuration layer; consumed only by connection providers.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// TLS negotiation mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslMode {
    /// Never use TLS
    #[default]
    Disable,
    /// Use TLS when the server offers it
    Prefer,
    /// Fail unless TLS is negotiated
    Require,
}

impl SslMode {
    /// libpq spelling of the mode
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disable => "disable",
            Self::Prefer => "prefer",
            Self::Require => "require",
        }
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SslMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disable" => Ok(Self::Disable),
            "prefer" => Ok(Self::Prefer),
            "require" => Ok(Self::Require),
            other => Err(Error::config(format!(
                "Unsupported sslmode '{other}'. Use disable, prefer, or require"
            ))),
        }
    }
}

/// Value Object: Connection Descriptor
///
/// Host, credentials and timeouts for one connection. `Debug` never prints
/// the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    /// Server host name or socket directory
    pub host: String,
    /// Server port
    pub port: u16,
    /// Login role
    pub user: String,
    /// Login password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// TLS mode
    pub ssl_mode: SslMode,
    /// Connection and statement timeout in seconds
    pub connect_timeout_secs: u64,
    /// Database name (server default when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Additional libpq `key=value` options appended verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_options: Option<String>,
}

impl ConnectionDescriptor {
    /// Render a libpq key/value connection string
    pub fn to_conninfo(&self) -> String {
        let mut parts = Vec::with_capacity(8);
        if let Some(password) = self.password.as_deref().filter(|p| !p.is_empty()) {
            parts.push(format!("password={}", quote_value(password)));
        }
        parts.push(format!("user={}", quote_value(&self.user)));
        parts.push(format!("host={}", quote_value(&self.host)));
        parts.push(format!("port={}", self.port));
        parts.push(format!("sslmode={}", self.ssl_mode));
        parts.push(format!("connect_timeout={}", self.connect_timeout_secs));
        if let Some(database) = self.database.as_deref().filter(|d| !d.is_empty()) {
            parts.push(format!("dbname={}", quote_value(database)));
        }
        if let Some(extra) = self.extra_options.as_deref().map(str::trim) {
            if !extra.is_empty() {
                parts.push(extra.to_string());
            }
        }
        parts.join(" ")
    }
}

impl fmt::Debug for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionDescriptor")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("ssl_mode", &self.ssl_mode)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("database", &self.database)
            .field("extra_options", &self.extra_options)
            .finish()
    }
}

fn quote_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if ch == '\'' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}
