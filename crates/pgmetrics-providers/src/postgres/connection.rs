//! PostgreSQL connection provider
//!
//! Opens exactly one client per collection through the r2d2 connection
//! manager, without a pool: the session owns the client and the connection
//! closes when the session is dropped.

use crate::constants::{MILLIS_PER_SECOND, POSTGRES_PROVIDER_NAME};
use crate::postgres::decode::decode_first_column;
use pgmetrics_domain::error::{Error, Result};
use pgmetrics_domain::ports::{ConnectionProvider, DecodedRow, QuerySession};
use pgmetrics_domain::value_objects::ConnectionDescriptor;
use r2d2::ManageConnection;
use r2d2_postgres::PostgresConnectionManager;
use r2d2_postgres::postgres::{Client, Config, NoTls};
use tracing::{debug, error};

/// Connection provider for a single PostgreSQL server
pub struct PostgresConnectionProvider {
    manager: PostgresConnectionManager<NoTls>,
    statement_timeout_ms: u64,
    target: String,
}

impl PostgresConnectionProvider {
    /// Create a provider from a connection descriptor
    ///
    /// The descriptor is validated here; no connection is attempted.
    pub fn new(descriptor: &ConnectionDescriptor) -> Result<Self> {
        let config: Config = descriptor
            .to_conninfo()
            .parse()
            .map_err(|e| Error::config_with_source("Invalid connection parameters", e))?;

        Ok(Self {
            manager: PostgresConnectionManager::new(config, NoTls),
            statement_timeout_ms: descriptor
                .connect_timeout_secs
                .saturating_mul(MILLIS_PER_SECOND),
            target: format!("{}:{}", descriptor.host, descriptor.port),
        })
    }

    /// `host:port` this provider connects to
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl ConnectionProvider for PostgresConnectionProvider {
    fn connect(&self) -> Result<Box<dyn QuerySession>> {
        let mut client = self.manager.connect().map_err(|e| {
            error!(target_addr = %self.target, error = %e, "Failed to connect");
            Error::connection_with_source(format!("Failed to connect to {}", self.target), e)
        })?;

        client
            .batch_execute(&format!(
                "SET statement_timeout = {}",
                self.statement_timeout_ms
            ))
            .map_err(|e| {
                Error::connection_with_source("Failed to apply statement timeout", e)
            })?;

        debug!(target_addr = %self.target, "Connection established");
        Ok(Box::new(PostgresSession {
            client,
            target: self.target.clone(),
        }))
    }

    fn provider_name(&self) -> &str {
        POSTGRES_PROVIDER_NAME
    }
}

/// An open PostgreSQL client
pub struct PostgresSession {
    client: Client,
    target: String,
}

impl QuerySession for PostgresSession {
    fn scalar_rows(&mut self, statement: &str) -> Result<Vec<DecodedRow>> {
        let rows = self.client.query(statement, &[]).map_err(|e| {
            let message = e.to_string();
            Error::query_execution_with_source(statement, message, e)
        })?;
        Ok(rows.iter().map(decode_first_column).collect())
    }
}

impl Drop for PostgresSession {
    fn drop(&mut self) {
        debug!(target_addr = %self.target, "Connection closed");
    }
}
