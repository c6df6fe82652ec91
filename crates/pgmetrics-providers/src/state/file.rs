//! JSON file state store
//!
//! Stores the last emitted snapshot as a flat JSON object of metric values
//! plus a `_lastTime` entry. The file is replaced atomically so a reader never
//! observes a half-written state.

use pgmetrics_domain::constants::STATE_LAST_TIME_KEY;
use pgmetrics_domain::error::{Error, Result};
use pgmetrics_domain::ports::{SnapshotStateStore, StoredSnapshot};
use pgmetrics_domain::value_objects::MetricSnapshot;
use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// State store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Create a store for the given file path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the state file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl SnapshotStateStore for FileStateStore {
    fn save(&self, snapshot: &MetricSnapshot, timestamp: i64) -> Result<()> {
        let mut document = match serde_json::to_value(snapshot)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        document.insert(STATE_LAST_TIME_KEY.to_string(), Value::from(timestamp));
        let body = serde_json::to_vec(&Value::Object(document))?;

        let mut file = NamedTempFile::new_in(self.directory()).map_err(|e| {
            Error::io_with_source(
                format!("Failed to create temporary state file in {}", self.directory().display()),
                e,
            )
        })?;
        file.write_all(&body)
            .and_then(|()| file.flush())
            .map_err(|e| Error::io_with_source("Failed to write state file", e))?;
        file.persist(&self.path).map_err(|e| {
            Error::io_with_source(
                format!("Failed to replace state file {}", self.path.display()),
                e.error,
            )
        })?;

        debug!(path = %self.path.display(), "Snapshot state saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredSnapshot>> {
        let body = match std::fs::read(&self.path) {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::io_with_source(
                    format!("Failed to read state file {}", self.path.display()),
                    e,
                ));
            }
        };

        let mut document: Map<String, Value> = serde_json::from_slice(&body)?;
        let timestamp = document
            .remove(STATE_LAST_TIME_KEY)
            .as_ref()
            .and_then(last_time)
            .ok_or_else(|| {
                Error::io(format!(
                    "State file {} has no {STATE_LAST_TIME_KEY} entry",
                    self.path.display()
                ))
            })?;
        let snapshot: MetricSnapshot = serde_json::from_value(Value::Object(document))?;

        Ok(Some(StoredSnapshot {
            snapshot,
            timestamp,
        }))
    }
}

/// `_lastTime` as unix seconds; float values are truncated
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn last_time(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|t| t.is_finite() && *t >= i64::MIN as f64 && *t < i64::MAX as f64)
            .map(|t| t.trunc() as i64)
    })
}
