//! Deterministic JSON snapshot writing.
//!
//! The snapshot is the pipeline's single output artifact. Downstream diff
//! and review tooling depends on byte-identical output for unchanged input,
//! so serialization is fully deterministic: array order is insertion order,
//! object keys are sorted (the records are `BTreeMap`-backed), indentation
//! is fixed at two spaces, non-ASCII text passes through unescaped, and the
//! document ends with a single newline.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use playbill_model::Record;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Serialize surviving records into the snapshot byte stream.
pub fn snapshot_to_bytes(records: &[Record]) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(records)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write the snapshot to disk, creating parent directories as needed.
///
/// Serialization completes in memory before any file is touched, so a
/// serialization failure leaves a prior snapshot file intact.
pub fn write_snapshot(path: &Path, records: &[Record]) -> Result<()> {
    let bytes = snapshot_to_bytes(records)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| SnapshotError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, &bytes).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), record_count = records.len(), byte_count = bytes.len(), "snapshot written");
    Ok(())
}
