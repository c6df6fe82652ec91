//! Infrastructure layer constants
//!
//! Process-level defaults. Protocol constants are defined in
//! `pgmetrics_domain::constants`.

// ============================================================================
// CONNECTION DEFAULTS
// ============================================================================

/// Default database host
pub const DEFAULT_HOST: &str = "localhost";

/// Default database port
pub const DEFAULT_PORT: u16 = 5432;

/// Default TLS mode
pub const DEFAULT_SSLMODE: &str = "disable";

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// ENVIRONMENT CONSTANTS
// ============================================================================

/// Environment variable prefix for configuration (`PGMETRICS__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "PGMETRICS";

/// Separator between prefix, section and key in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Password fallback read once by the CLI
pub const PASSWORD_ENV_VAR: &str = "PGPASSWORD";

/// Set to `1` by the monitoring agent to request graph definitions
pub const PLUGIN_META_ENV_VAR: &str = "MACKEREL_AGENT_PLUGIN_META";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "PGMETRICS_LOG";

/// Default log level; stdout carries the protocol, logs go to stderr
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// File name used when the log output path has none
pub const DEFAULT_LOG_FILE_NAME: &str = "pgmetrics.log";
