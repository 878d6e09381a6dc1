use serde::{Deserialize, Serialize};

use crate::favorites::{FavoriteDraft, FavoriteKind};

use super::{Category, CulturalEvent, CulturalSpace, Dataset, GeoPoint, NightViewSpot};

/// Positional identity of a fetched row. The upstream API provides no stable
/// id, so an item is addressed by its dataset and its index within that
/// dataset's fetched order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    pub dataset: Dataset,
    pub index: usize,
}

impl ItemRef {
    pub fn new(dataset: Dataset, index: usize) -> Self {
        Self { dataset, index }
    }
}

/// A catalog row from any of the three datasets, dispatched by tag.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogItem {
    Event(CulturalEvent),
    Space(CulturalSpace),
    Spot(NightViewSpot),
}

impl CatalogItem {
    pub fn category(&self) -> Category {
        match self {
            CatalogItem::Event(_) => Category::Events,
            CatalogItem::Space(_) => Category::Spaces,
            CatalogItem::Spot(_) => Category::Spots,
        }
    }

    pub fn coordinate(&self) -> Option<GeoPoint> {
        match self {
            CatalogItem::Event(event) => event.coordinate(),
            CatalogItem::Space(space) => space.coordinate(),
            CatalogItem::Spot(spot) => spot.coordinate(),
        }
    }

    /// Card-level projection of this item, with `index` as its identity.
    pub fn summary(&self, index: usize) -> ItemSummary {
        match self {
            CatalogItem::Event(event) => ItemSummary {
                id: index.to_string(),
                title: event.title.clone(),
                location: if event.venue.is_empty() {
                    event.district.clone()
                } else {
                    event.venue.clone()
                },
                date_label: event.date.clone(),
                image: Some(event.image_url.clone()).filter(|s| !s.is_empty()),
                badge: event.category_code.clone(),
                category: Category::Events,
                favorite_kind: FavoriteKind::Event,
            },
            CatalogItem::Space(space) => ItemSummary {
                id: index.to_string(),
                title: space.name.clone(),
                location: space.address.clone(),
                date_label: space
                    .closed_day
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .map(|day| format!("휴관일: {day}"))
                    .unwrap_or_default(),
                image: space.image().map(str::to_owned),
                badge: Category::Spaces.label().to_owned(),
                category: Category::Spaces,
                favorite_kind: FavoriteKind::Space,
            },
            CatalogItem::Spot(spot) => ItemSummary {
                id: index.to_string(),
                title: spot.title.clone(),
                location: spot.address.clone(),
                date_label: spot.operating_time.clone(),
                image: spot.image.clone().filter(|s| !s.is_empty()),
                badge: Category::Spots.label().to_owned(),
                category: Category::Spots,
                favorite_kind: FavoriteKind::Spot,
            },
        }
    }
}

/// What a card or the map detail panel shows for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSummary {
    pub id: String,
    pub title: String,
    pub location: String,
    pub date_label: String,
    pub image: Option<String>,
    /// Badge text: the category code for events, the category label otherwise.
    pub badge: String,
    pub category: Category,
    pub favorite_kind: FavoriteKind,
}

impl ItemSummary {
    pub fn to_favorite_draft(&self) -> FavoriteDraft {
        FavoriteDraft {
            id: self.id.clone(),
            kind: self.favorite_kind,
            title: self.title.clone(),
            location: self.location.clone(),
            image: self.image.clone(),
            category: Some(self.badge.clone()),
            date: Some(self.date_label.clone()).filter(|s| !s.is_empty()),
        }
    }
}
