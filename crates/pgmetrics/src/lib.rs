//! # pgmetrics
//!
//! Collects aggregate metrics from a PostgreSQL database and prints them in
//! the mackerel-agent plugin protocol.
//!
//! One invocation opens a single connection, runs the built-in query set,
//! merges the scalars into a snapshot and writes one line per metric:
//!
//! ```text
//! postgres.Count.count	5	1700000000
//! postgres.Sum.sum	42.0	1700000000
//! ```
//!
//! With `--graphdef` (or `MACKEREL_AGENT_PLUGIN_META` set) the graph schema
//! document is printed instead and no connection is made.
//!
//! ## Architecture
//!
//! - `domain` - Value objects, ports and the error taxonomy
//! - `application` - Fetcher, merger, emitter and the collection use case
//! - `providers` - PostgreSQL data source, built-in queries and graphs, state file
//! - `infrastructure` - Layered configuration and logging

/// Domain layer - value objects, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use pgmetrics_domain::*;
}

/// Application layer - pipeline stages and use cases
pub mod application {
    pub use pgmetrics_application::*;
}

/// Providers - PostgreSQL and state file implementations
pub mod providers {
    pub use pgmetrics_providers::*;
}

/// Infrastructure layer - configuration and logging
pub mod infrastructure {
    pub use pgmetrics_infrastructure::*;
}

mod runner;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the entry point at the crate root
pub use runner::{Mode, build_service, run};
