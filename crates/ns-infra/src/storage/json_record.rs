use std::io::ErrorKind;
use std::path::Path;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use ns_core::ports::StoreError;

/// Read a whole-list record. A missing file or undecodable content degrades
/// to an empty list; it is never an error the UI has to see.
pub(crate) async fn load_list<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(error) => {
            if error.kind() != ErrorKind::NotFound {
                warn!("unreadable record at {}: {error}; starting empty", path.display());
            }
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(error) => {
            warn!("corrupt record at {}: {error}; starting empty", path.display());
            Vec::new()
        }
    }
}

/// Replace the record with the given list. Written to a sibling temp file and
/// renamed over the target, so the record is always either the old or the new
/// content.
pub(crate) async fn store_list<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .await
            .map_err(|error| StoreError::Storage(format!("create {}: {error}", dir.display())))?;
    }

    let content = serde_json::to_string(items)
        .map_err(|error| StoreError::Storage(format!("encode record: {error}")))?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &content)
        .await
        .map_err(|error| StoreError::Storage(format!("write {}: {error}", tmp_path.display())))?;
    fs::rename(&tmp_path, path).await.map_err(|error| {
        StoreError::Storage(format!(
            "rename {} -> {}: {error}",
            tmp_path.display(),
            path.display()
        ))
    })?;

    Ok(())
}

/// Delete the record outright; already-gone is fine.
pub(crate) async fn remove_record(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
        Err(error) => Err(StoreError::Storage(format!(
            "remove {}: {error}",
            path.display()
        ))),
    }
}
