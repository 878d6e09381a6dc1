//! # ns-core
//!
//! Core domain models and business logic for NolSeoul.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod catalog;
pub mod config;
pub mod favorites;
pub mod map;
pub mod ports;
pub mod recent;
pub mod search;

// Re-export commonly used types at the crate root
pub use catalog::{
    CatalogItem, Category, CategoryFilter, CulturalEvent, CulturalSpace, Dataset, GeoPoint,
    ItemRef, ItemSummary, NightViewSpot,
};
pub use config::AppConfig;
pub use favorites::{FavoriteDraft, FavoriteItem, FavoriteKind, FavoriteLedger};
pub use map::{MarkerBoard, MarkerEntry, MarkerId, MarkerStyle};
pub use recent::RecentSearches;
