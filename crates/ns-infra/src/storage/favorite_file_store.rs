use std::path::{Path, PathBuf};

use async_trait::async_trait;

use ns_core::favorites::FavoriteItem;
use ns_core::ports::{FavoriteStorePort, StoreError};

use super::json_record;

/// File name of the favorites record.
pub const FAVORITES_FILE: &str = "nolseoul-favorites.json";

pub struct FavoriteFileStore {
    path: PathBuf,
}

impl FavoriteFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the conventional file name inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(FAVORITES_FILE))
    }
}

#[async_trait]
impl FavoriteStorePort for FavoriteFileStore {
    async fn load(&self) -> Result<Vec<FavoriteItem>, StoreError> {
        Ok(json_record::load_list(&self.path).await)
    }

    async fn save(&self, items: &[FavoriteItem]) -> Result<(), StoreError> {
        json_record::store_list(&self.path, items).await
    }
}
