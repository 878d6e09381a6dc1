//! Catalog domain models: the three upstream Seoul datasets.
mod category;
mod coords;
mod dataset;
mod event;
mod item;
mod space;
mod spot;

pub mod query;

pub use category::{Category, CategoryFilter};
pub use coords::GeoPoint;
pub use dataset::Dataset;
pub use event::CulturalEvent;
pub use item::{CatalogItem, ItemRef, ItemSummary};
pub use space::CulturalSpace;
pub use spot::NightViewSpot;
