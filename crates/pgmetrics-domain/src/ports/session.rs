//! Data Source Session Ports
//!
//! A [`ConnectionProvider`] opens exactly one [`QuerySession`] per collection
//! cycle. The session owns the underlying connection and releases it when
//! dropped, so every exit path of the fetcher closes it.

use crate::error::Result;
use crate::value_objects::MetricValue;
use std::sync::Arc;

/// First column of one result row
///
/// `Ok(None)` is a SQL NULL. `Err` carries a recoverable
/// [`Error::RowDecode`](crate::Error::RowDecode).
pub type DecodedRow = Result<Option<MetricValue>>;

/// An open connection able to run scalar statements
pub trait QuerySession {
    /// Run a statement and decode the first column of every returned row
    ///
    /// Failing to start or complete the statement is an error for the whole
    /// call; a row that cannot be decoded is reported in place.
    fn scalar_rows(&mut self, statement: &str) -> Result<Vec<DecodedRow>>;
}

/// Factory for query sessions
pub trait ConnectionProvider: Send + Sync {
    /// Open a new session
    fn connect(&self) -> Result<Box<dyn QuerySession>>;

    /// Short provider name for logs
    fn provider_name(&self) -> &str;
}

/// Type alias for shared connection provider
pub type SharedConnectionProvider = Arc<dyn ConnectionProvider>;
