use std::path::{Path, PathBuf};

use async_trait::async_trait;

use ns_core::ports::{RecentSearchStorePort, StoreError};

use super::json_record;

/// File name of the recent-search record.
pub const RECENT_SEARCHES_FILE: &str = "nolseoul-recent.json";

pub struct RecentSearchFileStore {
    path: PathBuf,
}

impl RecentSearchFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(RECENT_SEARCHES_FILE))
    }
}

#[async_trait]
impl RecentSearchStorePort for RecentSearchFileStore {
    async fn load(&self) -> Result<Vec<String>, StoreError> {
        Ok(json_record::load_list(&self.path).await)
    }

    async fn save(&self, terms: &[String]) -> Result<(), StoreError> {
        json_record::store_list(&self.path, terms).await
    }

    /// Clearing the history deletes the record, mirroring key removal.
    async fn clear(&self) -> Result<(), StoreError> {
        json_record::remove_record(&self.path).await
    }
}
