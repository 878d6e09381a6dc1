//! Recent-search service: bounded term history with write-through persistence.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;

use ns_core::ports::RecentSearchStorePort;
use ns_core::RecentSearches;

pub struct RecentSearchService {
    store: Arc<dyn RecentSearchStorePort>,
    recent: Mutex<RecentSearches>,
}

impl RecentSearchService {
    pub async fn load(store: Arc<dyn RecentSearchStorePort>) -> Result<Self> {
        let terms = store.load().await?;
        Ok(Self {
            store,
            recent: Mutex::new(RecentSearches::from_terms(terms)),
        })
    }

    /// Record a submitted term at the front of the history.
    pub async fn record(&self, term: &str) -> Result<()> {
        let mut recent = self.recent.lock().await;
        recent.add(term);
        self.store.save(recent.terms()).await?;
        Ok(())
    }

    pub async fn remove(&self, term: &str) -> Result<()> {
        let mut recent = self.recent.lock().await;
        if recent.remove(term) {
            self.store.save(recent.terms()).await?;
        }
        Ok(())
    }

    /// Empty the history and delete the stored record.
    pub async fn clear(&self) -> Result<()> {
        let mut recent = self.recent.lock().await;
        recent.clear();
        self.store.clear().await?;
        Ok(())
    }

    pub async fn terms(&self) -> Vec<String> {
        self.recent.lock().await.terms().to_vec()
    }
}
