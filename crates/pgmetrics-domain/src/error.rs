//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by the contextual variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for pgmetrics
///
/// Only [`Error::RowDecode`] is recoverable: the fetcher skips the offending
/// row and keeps going. Every other variant aborts the collection before any
/// metric line is written.
#[derive(Error, Debug)]
pub enum Error {
    /// The data source could not be reached
    #[error("Connection error: {message}")]
    Connection {
        /// Description of the connection failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A statement could not be executed
    #[error("Query '{query}' failed: {message}")]
    QueryExecution {
        /// Name of the query definition that failed
        query: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A row's scalar column could not be read as a number
    #[error("Row decode error: {message}")]
    RowDecode {
        /// Description of the decode failure
        message: String,
    },

    /// The output transport rejected a write
    #[error("Transport write error: {source}")]
    TransportWrite {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// I/O operation error outside the output transport
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Pipeline error creation methods
impl Error {
    /// Create a connection error
    pub fn connection<S: Into<String>>(message: S) -> Self {
        Self::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Create a connection error with source
    pub fn connection_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a query execution error
    pub fn query_execution<Q: Into<String>, S: Into<String>>(query: Q, message: S) -> Self {
        Self::QueryExecution {
            query: query.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a query execution error with source
    pub fn query_execution_with_source<Q, S, E>(query: Q, message: S, source: E) -> Self
    where
        Q: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::QueryExecution {
            query: query.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a row decode error
    pub fn row_decode<S: Into<String>>(message: S) -> Self {
        Self::RowDecode {
            message: message.into(),
        }
    }

    /// Wrap an I/O error raised by the output transport
    pub fn transport_write(source: std::io::Error) -> Self {
        Self::TransportWrite { source }
    }
}

// Configuration and general error creation methods
impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether the pipeline may swallow this error and continue
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::RowDecode { .. })
    }
}
