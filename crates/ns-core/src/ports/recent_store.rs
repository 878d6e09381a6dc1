use async_trait::async_trait;

use super::StoreError;

/// Durable storage for the recent-search-term list.
///
/// Same degradation contract as the favorites store: a missing or corrupt
/// record loads as an empty list. `clear` may delete the record outright.
#[async_trait]
pub trait RecentSearchStorePort: Send + Sync {
    async fn load(&self) -> Result<Vec<String>, StoreError>;

    async fn save(&self, terms: &[String]) -> Result<(), StoreError>;

    async fn clear(&self) -> Result<(), StoreError>;
}
