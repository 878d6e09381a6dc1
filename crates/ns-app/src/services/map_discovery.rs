//! Map discovery: drives the marker board from the dataset cache and the
//! user's category/selection state.

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::Mutex;

use ns_core::catalog::{
    CatalogItem, Category, CategoryFilter, CulturalEvent, CulturalSpace, Dataset, ItemRef,
    ItemSummary, NightViewSpot,
};
use ns_core::ports::{MapSurfacePort, MapSurfaceProviderPort};
use ns_core::{MarkerBoard, MarkerEntry, MarkerId};

use super::CatalogCache;

/// Items shown in the slide-over list for the All filter.
const NEARBY_MIX_CAP: usize = 10;
/// Per-dataset contribution to the All mix.
const NEARBY_BUCKET_CAP: usize = 10;

/// The map page either comes up with a live surface or lands in a terminal
/// error state; the only way out of `Unavailable` is a full reload.
pub enum MapPanel {
    Ready(MapDiscovery),
    Unavailable { reason: String },
}

impl MapPanel {
    pub async fn open(
        provider: Arc<dyn MapSurfaceProviderPort>,
        catalog: Arc<CatalogCache>,
    ) -> MapPanel {
        match provider.acquire().await {
            Ok(surface) => {
                info!("map surface acquired");
                MapPanel::Ready(MapDiscovery::new(surface, catalog))
            }
            Err(error) => {
                warn!("map surface unavailable: {error}");
                MapPanel::Unavailable {
                    reason: error.to_string(),
                }
            }
        }
    }
}

struct ViewState {
    board: MarkerBoard,
    filter: CategoryFilter,
    sub_filter: Option<String>,
}

/// One map session: the marker board, the active category filter, and the
/// sub-category filter for the list panel.
pub struct MapDiscovery {
    catalog: Arc<CatalogCache>,
    surface: Arc<dyn MapSurfacePort>,
    state: Mutex<ViewState>,
}

impl MapDiscovery {
    pub fn new(surface: Arc<dyn MapSurfacePort>, catalog: Arc<CatalogCache>) -> Self {
        Self {
            catalog,
            surface,
            state: Mutex::new(ViewState {
                board: MarkerBoard::new(),
                filter: CategoryFilter::All,
                sub_filter: None,
            }),
        }
    }

    async fn datasets(
        &self,
    ) -> (
        Arc<Vec<CulturalEvent>>,
        Arc<Vec<CulturalSpace>>,
        Arc<Vec<NightViewSpot>>,
    ) {
        // failed datasets render as empty; their error lives in the cache status
        (
            self.catalog.events().await.unwrap_or_default(),
            self.catalog.spaces().await.unwrap_or_default(),
            self.catalog.spots().await.unwrap_or_default(),
        )
    }

    /// Rebuild the marker set for the current filter. Called after the
    /// datasets land and again whenever they change.
    pub async fn refresh(&self) {
        let (events, spaces, spots) = self.datasets().await;
        let mut state = self.state.lock().await;
        let filter = state.filter;
        state
            .board
            .rebuild(self.surface.as_ref(), filter, &events, &spaces, &spots);
    }

    /// Switch the category filter: selection and sub-filter reset, markers
    /// rebuild.
    pub async fn set_filter(&self, filter: CategoryFilter) {
        let (events, spaces, spots) = self.datasets().await;
        let mut state = self.state.lock().await;
        state.filter = filter;
        state.sub_filter = None;
        state
            .board
            .rebuild(self.surface.as_ref(), filter, &events, &spaces, &spots);
    }

    pub async fn filter(&self) -> CategoryFilter {
        self.state.lock().await.filter
    }

    /// Marker click: promote to selected, recenter, and hand back the card
    /// projection of the item. A stale handle yields `None`.
    pub async fn click_marker(&self, marker: MarkerId) -> Option<ItemSummary> {
        let (events, spaces, spots) = self.datasets().await;
        let mut state = self.state.lock().await;
        let item = state.board.select(self.surface.as_ref(), marker)?;
        summarize(item, &events, &spaces, &spots)
    }

    /// Detail card closed: drop the selection.
    pub async fn close_detail(&self) {
        let mut state = self.state.lock().await;
        state.board.clear_selection(self.surface.as_ref());
    }

    pub async fn selected_summary(&self) -> Option<ItemSummary> {
        let (events, spaces, spots) = self.datasets().await;
        let state = self.state.lock().await;
        let item = state.board.selected_item()?;
        summarize(item, &events, &spaces, &spots)
    }

    pub async fn markers(&self) -> Vec<MarkerEntry> {
        self.state.lock().await.board.entries().to_vec()
    }

    /// Sub-category values for the list panel: subject codes for spaces and
    /// night spots, nothing otherwise (events have their own page).
    pub async fn sub_categories(&self) -> Vec<String> {
        let state = self.state.lock().await;
        match state.filter {
            CategoryFilter::Only(Category::Spaces) => {
                let spaces = self.catalog.spaces().await.unwrap_or_default();
                unique_codes(spaces.iter().map(|s| s.subject_code.as_deref().unwrap_or("")))
            }
            CategoryFilter::Only(Category::Spots) => {
                let spots = self.catalog.spots().await.unwrap_or_default();
                unique_codes(spots.iter().map(|s| s.subject_code.as_str()))
            }
            _ => Vec::new(),
        }
    }

    pub async fn set_sub_filter(&self, sub_filter: Option<String>) {
        self.state.lock().await.sub_filter = sub_filter;
    }

    /// The list panel's contents. A single category lists every matching item
    /// (honoring the sub-filter); the All filter interleaves the head of each
    /// dataset round-robin, capped at ten.
    pub async fn visible_items(&self) -> Vec<ItemSummary> {
        let (events, spaces, spots) = self.datasets().await;
        let state = self.state.lock().await;
        let sub = state.sub_filter.as_deref();

        match state.filter {
            CategoryFilter::Only(Category::Events) => events
                .iter()
                .enumerate()
                .filter(|(_, e)| sub.is_none_or(|code| e.category_code == code))
                .map(|(i, e)| CatalogItem::Event(e.clone()).summary(i))
                .collect(),
            CategoryFilter::Only(Category::Spaces) => spaces
                .iter()
                .enumerate()
                .filter(|(_, s)| sub.is_none_or(|code| s.subject_code.as_deref() == Some(code)))
                .map(|(i, s)| CatalogItem::Space(s.clone()).summary(i))
                .collect(),
            CategoryFilter::Only(Category::Spots) => spots
                .iter()
                .enumerate()
                .filter(|(_, s)| sub.is_none_or(|code| s.subject_code == code))
                .map(|(i, s)| CatalogItem::Spot(s.clone()).summary(i))
                .collect(),
            CategoryFilter::All => round_robin_mix(&events, &spaces, &spots),
        }
    }
}

fn summarize(
    item: ItemRef,
    events: &[CulturalEvent],
    spaces: &[CulturalSpace],
    spots: &[NightViewSpot],
) -> Option<ItemSummary> {
    let summary = match item.dataset {
        Dataset::Events => CatalogItem::Event(events.get(item.index)?.clone()),
        Dataset::Spaces => CatalogItem::Space(spaces.get(item.index)?.clone()),
        Dataset::Spots => CatalogItem::Spot(spots.get(item.index)?.clone()),
    }
    .summary(item.index);
    Some(summary)
}

fn unique_codes<'a>(codes: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for code in codes {
        if !code.is_empty() && !seen.iter().any(|c| c == code) {
            seen.push(code.to_owned());
        }
    }
    seen
}

/// Interleave the head of each dataset so the All list samples every
/// category instead of draining the first one.
fn round_robin_mix(
    events: &[CulturalEvent],
    spaces: &[CulturalSpace],
    spots: &[NightViewSpot],
) -> Vec<ItemSummary> {
    let buckets: [Vec<ItemSummary>; 3] = [
        events
            .iter()
            .take(NEARBY_BUCKET_CAP)
            .enumerate()
            .map(|(i, e)| CatalogItem::Event(e.clone()).summary(i))
            .collect(),
        spaces
            .iter()
            .take(NEARBY_BUCKET_CAP)
            .enumerate()
            .map(|(i, s)| CatalogItem::Space(s.clone()).summary(i))
            .collect(),
        spots
            .iter()
            .take(NEARBY_BUCKET_CAP)
            .enumerate()
            .map(|(i, s)| CatalogItem::Spot(s.clone()).summary(i))
            .collect(),
    ];

    let mut mixed = Vec::new();
    let mut round = 0;
    while mixed.len() < NEARBY_MIX_CAP {
        let mut added = false;
        for bucket in &buckets {
            if let Some(summary) = bucket.get(round) {
                mixed.push(summary.clone());
                added = true;
            }
        }
        if !added {
            break;
        }
        round += 1;
    }
    mixed.truncate(NEARBY_MIX_CAP);
    mixed
}
