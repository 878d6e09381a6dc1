use async_trait::async_trait;

use super::StoreError;
use crate::favorites::FavoriteItem;

/// Durable storage for the favorites list under a fixed key.
///
/// `load` must degrade to an empty list when the stored record is missing or
/// corrupt; it never fails for bad content. `save` replaces the whole record.
#[async_trait]
pub trait FavoriteStorePort: Send + Sync {
    async fn load(&self) -> Result<Vec<FavoriteItem>, StoreError>;

    async fn save(&self, items: &[FavoriteItem]) -> Result<(), StoreError>;
}
