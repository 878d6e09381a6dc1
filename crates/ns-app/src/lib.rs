//! NolSeoul Application Orchestration Layer
//!
//! This crate wires the domain core to infrastructure ports: the dataset
//! cache, the favorites and recent-search services, search, and the
//! map-discovery service.

pub mod deps;
pub mod services;

pub use deps::{App, AppDeps};
pub use services::{
    CatalogCache, DatasetStatus, FavoritesService, MapDiscovery, MapPanel, RecentSearchService,
    SearchService,
};
