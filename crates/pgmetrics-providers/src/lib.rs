//! # pgmetrics - Provider Implementations
//!
//! Concrete implementations of the ports defined in `pgmetrics-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Data Source | `ConnectionProvider` | PostgreSQL |
//! | State | `SnapshotStateStore` | JSON file |
//!
//! The PostgreSQL module also owns the built-in query set and the graph
//! schema registry describing its metrics.
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! pgmetrics-providers = { version = "0.1", default-features = false, features = ["postgres"] }
//! ```

// Re-export pgmetrics-domain types commonly used with providers
pub use pgmetrics_domain::error::{Error, Result};
pub use pgmetrics_domain::ports::{ConnectionProvider, QuerySession, SnapshotStateStore};

/// Provider-specific constants
pub mod constants;

/// PostgreSQL data source, query set and graph schema
#[cfg(feature = "postgres")]
pub mod postgres;

/// Snapshot state persistence
#[cfg(feature = "state-file")]
pub mod state;
