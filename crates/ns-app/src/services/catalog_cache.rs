//! Read-through, request-deduplicating cache over the three upstream datasets.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;
use tokio::sync::OnceCell;

use ns_core::catalog::{CulturalEvent, CulturalSpace, Dataset, NightViewSpot};
use ns_core::ports::{CatalogFetchError, CatalogSourcePort};

/// Fetch outcome shared by every caller of the same cache.
pub type FetchResult<T> = Result<Arc<Vec<T>>, CatalogFetchError>;

/// Where a dataset stands, the `(items, isLoading, isError)` triple as one enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DatasetStatus {
    Idle,
    Loading,
    Ready { items: usize },
    Failed { error: String },
}

/// One dataset's slot: a single-assignment cell plus an in-flight flag.
///
/// `OnceCell` runs at most one initializer at a time and makes every
/// concurrent caller await it, which is exactly the shared-pending-request
/// rule. Both success and failure stick for the lifetime of the cache; the
/// reload analog is constructing a fresh cache.
struct DatasetCell<T> {
    cell: OnceCell<FetchResult<T>>,
    loading: AtomicBool,
}

impl<T> DatasetCell<T> {
    fn new() -> Self {
        Self {
            cell: OnceCell::new(),
            loading: AtomicBool::new(false),
        }
    }

    async fn get<F, Fut>(&self, dataset: Dataset, fetch: F) -> FetchResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, CatalogFetchError>>,
    {
        self.cell
            .get_or_init(|| async {
                self.loading.store(true, Ordering::SeqCst);
                debug!("fetching dataset {dataset}");
                let outcome = fetch().await.map(Arc::new);
                if let Err(error) = &outcome {
                    warn!("dataset {dataset} fetch failed: {error}");
                }
                self.loading.store(false, Ordering::SeqCst);
                outcome
            })
            .await
            .clone()
    }

    fn status(&self) -> DatasetStatus {
        match self.cell.get() {
            Some(Ok(items)) => DatasetStatus::Ready { items: items.len() },
            Some(Err(error)) => DatasetStatus::Failed {
                error: error.to_string(),
            },
            None if self.loading.load(Ordering::SeqCst) => DatasetStatus::Loading,
            None => DatasetStatus::Idle,
        }
    }
}

/// Session-lifetime cache in front of a [`CatalogSourcePort`]. No TTL, no
/// background refresh, no retry.
pub struct CatalogCache {
    source: Arc<dyn CatalogSourcePort>,
    events: DatasetCell<CulturalEvent>,
    spaces: DatasetCell<CulturalSpace>,
    spots: DatasetCell<NightViewSpot>,
}

impl CatalogCache {
    pub fn new(source: Arc<dyn CatalogSourcePort>) -> Self {
        Self {
            source,
            events: DatasetCell::new(),
            spaces: DatasetCell::new(),
            spots: DatasetCell::new(),
        }
    }

    pub async fn events(&self) -> FetchResult<CulturalEvent> {
        let source = Arc::clone(&self.source);
        self.events
            .get(Dataset::Events, move || async move {
                source.fetch_events().await
            })
            .await
    }

    pub async fn spaces(&self) -> FetchResult<CulturalSpace> {
        let source = Arc::clone(&self.source);
        self.spaces
            .get(Dataset::Spaces, move || async move {
                source.fetch_spaces().await
            })
            .await
    }

    pub async fn spots(&self) -> FetchResult<NightViewSpot> {
        let source = Arc::clone(&self.source);
        self.spots
            .get(Dataset::Spots, move || async move {
                source.fetch_spots().await
            })
            .await
    }

    /// Kick all three fetches concurrently. Failures stay cached per dataset;
    /// callers read them back through `status`.
    pub async fn prime(&self) {
        let (events, spaces, spots) =
            futures::future::join3(self.events(), self.spaces(), self.spots()).await;
        debug!(
            "catalog primed: events={} spaces={} spots={}",
            events.map(|v| v.len()).unwrap_or(0),
            spaces.map(|v| v.len()).unwrap_or(0),
            spots.map(|v| v.len()).unwrap_or(0),
        );
    }

    pub fn status(&self, dataset: Dataset) -> DatasetStatus {
        match dataset {
            Dataset::Events => self.events.status(),
            Dataset::Spaces => self.spaces.status(),
            Dataset::Spots => self.spots.status(),
        }
    }
}
