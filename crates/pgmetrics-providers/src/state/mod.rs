//! Snapshot state providers

pub mod file;

pub use file::FileStateStore;
