use crate::geojson::to_feature_collection;
use crate::map_canvas::MapSnapshot;
use chrono::Utc;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::sync::watch::Receiver;
use tracing::{debug, instrument, warn};

/// Writes every published snapshot to `path` as GeoJSON until the notifier closes.
#[instrument(skip(rx))]
pub async fn snapshot_listener(mut rx: Receiver<MapSnapshot>, path: PathBuf) {
    while rx.changed().await.is_ok() {
        let snapshot: MapSnapshot = rx.borrow_and_update().clone();

        match write_snapshot(&snapshot, &path).await {
            Ok(()) => debug!("💾 Wrote {} marker(s) and {} polygon(s)", snapshot.markers.len(), snapshot.polygons.len()),
            Err(err) => warn!("⚠️ Unable to write map snapshot: {}", err),
        }
    }
}

async fn write_snapshot(snapshot: &MapSnapshot, path: &Path) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(&to_feature_collection(snapshot, Utc::now()))?;
    fs::write(path, json).await.map_err(|source| SnapshotError::Io {
        source,
        path: path.to_path_buf(),
    })
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{} ({})", source, path.display())]
    Io { source: std::io::Error, path: PathBuf },
}
