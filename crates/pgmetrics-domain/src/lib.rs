//! # pgmetrics Domain Layer
//!
//! Core types and contracts for collecting a single metric snapshot from a
//! relational database and publishing it to a monitoring agent.
//!
//! ## Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Metric values, snapshots, query sets, graph schemas, connection descriptors |
//! | [`ports`] | Boundary traits implemented by providers (data sources, sessions, state stores) |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Protocol and naming constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use value_objects::{
    ConnectionDescriptor, GraphDefinition, GraphMetric, GraphSchema, GraphUnit, MetricFragment,
    MetricSnapshot, MetricValue, QueryDefinition, QuerySet, SslMode, ValueKind,
};
