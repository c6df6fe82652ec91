//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns of the collector.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered configuration (defaults, TOML, environment, CLI) |
//! | [`logging`] | Structured logging with tracing, scoped to one invocation |
//! | [`constants`] | Process-level defaults |
//! | [`error_ext`] | Context extension for foreign errors |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{CollectorConfig, ConfigLoader, ConnectionConfig, LoggingConfig, OutputConfig};
pub use error_ext::ErrorContext;
