//! Fetcher
//!
//! Runs every query of a [`QuerySet`] against one open session, in order,
//! producing one fragment per query.

use pgmetrics_domain::error::{Error, Result};
use pgmetrics_domain::ports::QuerySession;
use pgmetrics_domain::value_objects::{MetricFragment, MetricValue, QueryDefinition, QuerySet};
use tracing::{debug, error, warn};

/// Run the whole query set, aborting on the first statement failure
///
/// Fragments come back in query set order. No fragment is returned when any
/// statement fails, so callers never see a partial snapshot.
pub fn fetch_fragments(
    session: &mut dyn QuerySession,
    queries: &QuerySet,
) -> Result<Vec<MetricFragment>> {
    let mut fragments = Vec::with_capacity(queries.len());
    for query in queries {
        let value = fetch_scalar(session, query)?;
        debug!(query = %query.name, key = %query.result_key, %value, "Query fetched");
        fragments.push(MetricFragment::new(&query.name).with_value(&query.result_key, value));
    }
    Ok(fragments)
}

/// Run one query and pick its scalar
///
/// The first row that decodes to a value of the query's kind wins. Rows
/// that fail to decode are skipped; NULL rows are ignored. With no usable
/// row the query's default value is returned.
pub fn fetch_scalar(session: &mut dyn QuerySession, query: &QueryDefinition) -> Result<MetricValue> {
    let rows = session.scalar_rows(&query.statement).map_err(|err| {
        error!(query = %query.name, error = %err, "Failed to select");
        attribute_to(query, err)
    })?;

    for (index, row) in rows.into_iter().enumerate() {
        match row {
            Ok(Some(raw)) => {
                if let Some(value) = raw.coerce(query.kind()) {
                    return Ok(value);
                }
                warn!(
                    query = %query.name,
                    row = index,
                    value = %raw,
                    expected = ?query.kind(),
                    "Failed to scan: value does not fit the query kind"
                );
            }
            Ok(None) => {
                debug!(query = %query.name, row = index, "NULL value ignored");
            }
            Err(err) if err.is_recoverable() => {
                warn!(query = %query.name, row = index, error = %err, "Failed to scan");
            }
            Err(err) => return Err(attribute_to(query, err)),
        }
    }

    Ok(query.default_value)
}

/// Name the failing query definition instead of the raw statement
fn attribute_to(query: &QueryDefinition, err: Error) -> Error {
    match err {
        Error::QueryExecution {
            message, source, ..
        } => Error::QueryExecution {
            query: query.name.clone(),
            message,
            source,
        },
        other => other,
    }
}
