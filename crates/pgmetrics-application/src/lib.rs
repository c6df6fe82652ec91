//! Application Layer - pgmetrics
//!
//! Orchestrates one collection cycle: open a session, run the query set,
//! merge the fragments and write the snapshot in the agent's line protocol.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains the pipeline stages (fetcher, merger, emitter)
//! - Implements the `MetricSource` port generically over any connection provider
//! - Has no dependencies on infrastructure or concrete database drivers
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `pgmetrics-domain`: For value objects, errors and port traits
//! - Pure Rust libraries for serialization and logging

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
