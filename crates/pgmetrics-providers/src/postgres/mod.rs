//! PostgreSQL provider
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`connection`] | `ConnectionProvider` opening one client per collection |
//! | [`decode`] | First-column decoding, including binary NUMERIC |
//! | [`queries`] | Built-in query set |
//! | [`graphs`] | Graph schema registry for the built-in metrics |

pub mod connection;
pub mod decode;
pub mod graphs;
pub mod queries;

pub use connection::{PostgresConnectionProvider, PostgresSession};
pub use decode::{PgNumeric, decode_first_column, decode_value};
pub use graphs::graph_definitions;
pub use queries::builtin_query_set;
