//! Favorites service: the in-memory ledger plus write-through persistence.

use std::sync::Arc;

use anyhow::Result;
use log::warn;
use tokio::sync::Mutex;

use ns_core::favorites::{FavoriteCounts, FavoriteDraft, FavoriteItem, FavoriteKind, Toggled};
use ns_core::ports::{ClockPort, FavoriteStorePort};
use ns_core::FavoriteLedger;

/// Owns the favorites ledger for the session. Every mutation stamps the save
/// time from the clock and persists the whole list before returning; the
/// mutex keeps mutate-then-persist atomic with respect to other callers.
pub struct FavoritesService {
    store: Arc<dyn FavoriteStorePort>,
    clock: Arc<dyn ClockPort>,
    ledger: Mutex<FavoriteLedger>,
}

impl FavoritesService {
    /// Load the persisted list. A corrupt or missing record comes back from
    /// the store as empty, so this only fails on real storage errors.
    pub async fn load(
        store: Arc<dyn FavoriteStorePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self> {
        let items = store.load().await?;
        Ok(Self {
            store,
            clock,
            ledger: Mutex::new(FavoriteLedger::from_items(items)),
        })
    }

    /// Insert unless already present; a duplicate add is a no-op, not an
    /// error, and does not rewrite the stored record.
    pub async fn add(&self, draft: FavoriteDraft) -> Result<bool> {
        let mut ledger = self.ledger.lock().await;
        let changed = ledger.add(draft, self.clock.now_ms());
        if changed {
            self.store.save(ledger.items()).await?;
        }
        Ok(changed)
    }

    pub async fn remove(&self, id: &str, kind: FavoriteKind) -> Result<bool> {
        let mut ledger = self.ledger.lock().await;
        let changed = ledger.remove(id, kind);
        if changed {
            self.store.save(ledger.items()).await?;
        }
        Ok(changed)
    }

    pub async fn toggle(&self, draft: FavoriteDraft) -> Result<Toggled> {
        let mut ledger = self.ledger.lock().await;
        let outcome = ledger.toggle(draft, self.clock.now_ms());
        if let Err(error) = self.store.save(ledger.items()).await {
            warn!("favorites persist failed after toggle: {error}");
            return Err(error.into());
        }
        Ok(outcome)
    }

    pub async fn is_favorite(&self, id: &str, kind: FavoriteKind) -> bool {
        self.ledger.lock().await.is_favorite(id, kind)
    }

    /// Favorites of one kind, most-recently-added first.
    pub async fn by_kind(&self, kind: FavoriteKind) -> Vec<FavoriteItem> {
        self.ledger
            .lock()
            .await
            .by_kind(kind)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn items(&self) -> Vec<FavoriteItem> {
        self.ledger.lock().await.items().to_vec()
    }

    pub async fn counts(&self) -> FavoriteCounts {
        self.ledger.lock().await.counts()
    }
}
