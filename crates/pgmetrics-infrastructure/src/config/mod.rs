//! Configuration
//!
//! Sources are merged in this order (later sources override earlier):
//! 1. Default values from `CollectorConfig::default()`
//! 2. TOML configuration file (when given)
//! 3. Environment variables (`PGMETRICS__CONNECTION__HOST`, ...)
//! 4. Command line overrides

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CollectorConfig, ConnectionConfig, LoggingConfig, OutputConfig};
