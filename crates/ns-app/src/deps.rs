//! Application dependency grouping.
//!
//! `AppDeps` is not a builder: no build steps, no defaults, no hidden logic,
//! just parameter grouping. Every port is required, and `App::new` is the one
//! place the stores come up — constructed once at application start and passed
//! by reference to whatever shell hosts them.

use std::sync::Arc;

use anyhow::Result;

use ns_core::ports::{
    CatalogSourcePort, ClockPort, FavoriteStorePort, MapSurfaceProviderPort, RecentSearchStorePort,
};

use crate::services::{
    CatalogCache, FavoritesService, MapPanel, RecentSearchService, SearchService,
};

/// Everything the application layer needs from infrastructure.
pub struct AppDeps {
    pub catalog_source: Arc<dyn CatalogSourcePort>,
    pub favorite_store: Arc<dyn FavoriteStorePort>,
    pub recent_store: Arc<dyn RecentSearchStorePort>,
    pub map_provider: Arc<dyn MapSurfaceProviderPort>,
    pub clock: Arc<dyn ClockPort>,
}

/// The assembled application runtime.
pub struct App {
    pub catalog: Arc<CatalogCache>,
    pub favorites: Arc<FavoritesService>,
    pub recent: Arc<RecentSearchService>,
    pub search: Arc<SearchService>,
    map_provider: Arc<dyn MapSurfaceProviderPort>,
}

impl App {
    /// Construct every service from its ports, loading persisted state. This
    /// constructor signature is the dependency manifest.
    pub async fn new(deps: AppDeps) -> Result<App> {
        let catalog = Arc::new(CatalogCache::new(deps.catalog_source));
        let favorites = Arc::new(FavoritesService::load(deps.favorite_store, deps.clock).await?);
        let recent = Arc::new(RecentSearchService::load(deps.recent_store).await?);
        let search = Arc::new(SearchService::new(Arc::clone(&catalog), Arc::clone(&recent)));

        Ok(App {
            catalog,
            favorites,
            recent,
            search,
            map_provider: deps.map_provider,
        })
    }

    /// Bring up the map page: acquires the surface, or lands in the terminal
    /// unavailable state.
    pub async fn open_map(&self) -> MapPanel {
        MapPanel::open(Arc::clone(&self.map_provider), Arc::clone(&self.catalog)).await
    }
}
