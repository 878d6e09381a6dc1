//! Search service: runs the in-memory index over cached datasets and records
//! submitted terms into the recent-search history.

use std::sync::Arc;

use anyhow::Result;

use ns_core::catalog::{CulturalEvent, CulturalSpace, NightViewSpot};
use ns_core::search::{self, GenreCount};

use super::{CatalogCache, RecentSearchService};

/// An owned match with its positional index.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<T> {
    pub index: usize,
    pub item: T,
}

#[derive(Debug, Default)]
pub struct SearchReport {
    pub events: Vec<SearchHit<CulturalEvent>>,
    pub spaces: Vec<SearchHit<CulturalSpace>>,
    pub spots: Vec<SearchHit<NightViewSpot>>,
}

impl SearchReport {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.spaces.is_empty() && self.spots.is_empty()
    }
}

pub struct SearchService {
    catalog: Arc<CatalogCache>,
    recent: Arc<RecentSearchService>,
}

impl SearchService {
    pub fn new(catalog: Arc<CatalogCache>, recent: Arc<RecentSearchService>) -> Self {
        Self { catalog, recent }
    }

    /// Live search while the user types. Datasets that failed to fetch
    /// contribute no results; the query itself never fails.
    pub async fn query(&self, query: &str) -> SearchReport {
        let events = self.catalog.events().await.unwrap_or_default();
        let spaces = self.catalog.spaces().await.unwrap_or_default();
        let spots = self.catalog.spots().await.unwrap_or_default();

        let results = search::search(query, &events, &spaces, &spots);
        SearchReport {
            events: results
                .events
                .into_iter()
                .map(|hit| SearchHit {
                    index: hit.index,
                    item: hit.item.clone(),
                })
                .collect(),
            spaces: results
                .spaces
                .into_iter()
                .map(|hit| SearchHit {
                    index: hit.index,
                    item: hit.item.clone(),
                })
                .collect(),
            spots: results
                .spots
                .into_iter()
                .map(|hit| SearchHit {
                    index: hit.index,
                    item: hit.item.clone(),
                })
                .collect(),
        }
    }

    /// Explicit submission: records the trimmed term, then searches. A
    /// whitespace-only submission records nothing.
    pub async fn submit(&self, query: &str) -> Result<SearchReport> {
        let term = query.trim();
        if !term.is_empty() {
            self.recent.record(term).await?;
        }
        Ok(self.query(term).await)
    }

    /// Genre ranking across the full event dataset, top eight.
    pub async fn popular_genres(&self) -> Vec<GenreCount> {
        match self.catalog.events().await {
            Ok(events) => search::popular_genres(&events),
            Err(_) => Vec::new(),
        }
    }

    /// Three random events for the pre-search panel. Recomputed per call.
    pub async fn recommended(&self) -> Vec<SearchHit<CulturalEvent>> {
        let Ok(events) = self.catalog.events().await else {
            return Vec::new();
        };
        search::recommended(&events, &mut rand::rng())
            .into_iter()
            .map(|hit| SearchHit {
                index: hit.index,
                item: hit.item.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use ns_core::ports::{CatalogFetchError, CatalogSourcePort, RecentSearchStorePort, StoreError};

    use super::*;

    struct StubSource;

    #[async_trait]
    impl CatalogSourcePort for StubSource {
        async fn fetch_events(&self) -> Result<Vec<CulturalEvent>, CatalogFetchError> {
            Ok(vec![
                serde_json::from_str(r#"{"TITLE": "재즈 페스티벌", "CODENAME": "콘서트"}"#).unwrap(),
                serde_json::from_str(r#"{"TITLE": "고궁 야간개장", "CODENAME": "전통"}"#).unwrap(),
            ])
        }

        async fn fetch_spaces(&self) -> Result<Vec<CulturalSpace>, CatalogFetchError> {
            Err(CatalogFetchError::UpstreamXml)
        }

        async fn fetch_spots(&self) -> Result<Vec<NightViewSpot>, CatalogFetchError> {
            Ok(vec![
                serde_json::from_str(r#"{"TITLE": "남산 야경", "ADDR": "용산구"}"#).unwrap(),
            ])
        }
    }

    #[derive(Default)]
    struct MemoryRecent(tokio::sync::Mutex<Vec<String>>);

    #[async_trait]
    impl RecentSearchStorePort for MemoryRecent {
        async fn load(&self) -> Result<Vec<String>, StoreError> {
            Ok(self.0.lock().await.clone())
        }

        async fn save(&self, terms: &[String]) -> Result<(), StoreError> {
            *self.0.lock().await = terms.to_vec();
            Ok(())
        }

        async fn clear(&self) -> Result<(), StoreError> {
            self.0.lock().await.clear();
            Ok(())
        }
    }

    async fn service() -> (SearchService, Arc<RecentSearchService>) {
        let catalog = Arc::new(CatalogCache::new(Arc::new(StubSource)));
        let recent = Arc::new(
            RecentSearchService::load(Arc::new(MemoryRecent::default()))
                .await
                .unwrap(),
        );
        (SearchService::new(catalog, recent.clone()), recent)
    }

    #[tokio::test]
    async fn failed_datasets_contribute_no_results() {
        let (search, _) = service().await;
        let report = search.query("야").await;
        assert_eq!(report.events.len(), 1);
        assert!(report.spaces.is_empty());
        assert_eq!(report.spots.len(), 1);
    }

    #[tokio::test]
    async fn submit_records_the_trimmed_term() {
        let (search, recent) = service().await;
        search.submit("  재즈 ").await.unwrap();
        assert_eq!(recent.terms().await, ["재즈"]);
    }

    #[tokio::test]
    async fn blank_submission_records_nothing_and_matches_nothing() {
        let (search, recent) = service().await;
        let report = search.submit("   ").await.unwrap();
        assert!(report.is_empty());
        assert!(recent.terms().await.is_empty());
    }

    #[tokio::test]
    async fn popular_genres_rank_event_codes() {
        let (search, _) = service().await;
        let genres = search.popular_genres().await;
        assert_eq!(genres.len(), 2);
        assert_eq!(genres[0].count, 1);
    }

    #[tokio::test]
    async fn recommended_draws_from_the_event_dataset() {
        let (search, _) = service().await;
        let picks = search.recommended().await;
        assert_eq!(picks.len(), 2);
        assert!(picks.iter().all(|hit| hit.index < 2));
    }
}
