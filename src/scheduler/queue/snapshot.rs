//! Crash-recovery snapshots of the notification queue.
//!
//! The snapshot is the serialized [`QueueBuffer`] (`{"offset": n, "queue": [...]}`). It is
//! written atomically: the JSON goes to `<path>.tmp` first and is then renamed over
//! `<path>`, so a reader sees either the previous snapshot or the new one.

use std::{
    io,
    path::{Path, PathBuf},
};

use super::state::QueueBuffer;
use crate::error::snapshot::SnapshotError;

/// Loads a snapshot.
///
/// # Returns
/// - `Ok(Some(QueueBuffer))` - Snapshot restored
/// - `Ok(None)` - No snapshot file exists
/// - `Err(SnapshotError)` - The file could not be read or is not a valid snapshot
pub async fn load(path: &Path) -> Result<Option<QueueBuffer>, SnapshotError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    Ok(Some(serde_json::from_slice(&bytes)?))
}

/// Writes a snapshot, replacing any previous one.
pub async fn save(path: &Path, buffer: &QueueBuffer) -> Result<(), SnapshotError> {
    let json = serde_json::to_vec(buffer)?;
    let tmp = temp_path(path);

    tokio::fs::write(&tmp, &json).await?;
    tokio::fs::rename(&tmp, path).await?;

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
