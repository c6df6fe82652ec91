//! Domain Port Interfaces
//!
//! Boundary contracts between the collection pipeline and the outside world.
//! Providers implement them; the application layer consumes them.
//!
//! ## Organization
//!
//! - **session** - Connections to a queryable data source
//! - **source** - Complete metric sources (snapshot + graph schema)
//! - **state_store** - Persistence of the last emitted snapshot

/// Data source connection ports
pub mod session;
/// Metric source port
pub mod source;
/// Snapshot state persistence port
pub mod state_store;

pub use session::{ConnectionProvider, DecodedRow, QuerySession, SharedConnectionProvider};
pub use source::MetricSource;
pub use state_store::{SnapshotStateStore, StoredSnapshot};
