//! User bookmarks, keyed by `(id, kind)`.
//!
//! The ledger is an ordered, most-recently-added-first list. Mutations never
//! edit a record in place; an item changes only by remove-and-re-add.

use serde::{Deserialize, Serialize};

/// Which dataset a favorite came from. Serialized with lowercase storage
/// tags (`event` / `space` / `spot`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Event,
    Space,
    Spot,
}

impl FavoriteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FavoriteKind::Event => "event",
            FavoriteKind::Space => "space",
            FavoriteKind::Spot => "spot",
        }
    }
}

/// A stored bookmark. The wire shape uses camelCase `savedAt` and `type`
/// for the kind tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FavoriteKind,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "savedAt")]
    pub saved_at_ms: i64,
}

impl FavoriteItem {
    /// Save time as a UTC timestamp; records with an out-of-range stamp
    /// fall back to the epoch.
    pub fn saved_at(&self) -> chrono::DateTime<chrono::Utc> {
        chrono::DateTime::from_timestamp_millis(self.saved_at_ms).unwrap_or_default()
    }
}

/// A favorite as submitted by the user, before the save timestamp is stamped.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteDraft {
    pub id: String,
    pub kind: FavoriteKind,
    pub title: String,
    pub location: String,
    pub image: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl FavoriteDraft {
    fn into_item(self, saved_at_ms: i64) -> FavoriteItem {
        FavoriteItem {
            id: self.id,
            kind: self.kind,
            title: self.title,
            location: self.location,
            image: self.image,
            category: self.category,
            date: self.date,
            saved_at_ms,
        }
    }
}

/// Outcome of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// Per-kind favorite counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FavoriteCounts {
    pub events: usize,
    pub spaces: usize,
    pub spots: usize,
}

/// The in-memory favorites collection. Invariant: at most one record per
/// `(id, kind)`, newest first.
#[derive(Debug, Clone, Default)]
pub struct FavoriteLedger {
    items: Vec<FavoriteItem>,
}

impl FavoriteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted records, dropping later duplicates of any
    /// `(id, kind)` pair so the invariant holds even over corrupt input.
    pub fn from_items(items: Vec<FavoriteItem>) -> Self {
        let mut ledger = Self::new();
        for item in items {
            if !ledger.is_favorite(&item.id, item.kind) {
                ledger.items.push(item);
            }
        }
        ledger
    }

    /// Insert unless an entry with the same `(id, kind)` already exists.
    /// Returns whether the ledger changed.
    pub fn add(&mut self, draft: FavoriteDraft, now_ms: i64) -> bool {
        if self.is_favorite(&draft.id, draft.kind) {
            return false;
        }
        self.items.insert(0, draft.into_item(now_ms));
        true
    }

    /// Delete the matching entry if present. Returns whether the ledger changed.
    pub fn remove(&mut self, id: &str, kind: FavoriteKind) -> bool {
        let before = self.items.len();
        self.items.retain(|f| !(f.id == id && f.kind == kind));
        self.items.len() != before
    }

    /// Remove if present, else add.
    pub fn toggle(&mut self, draft: FavoriteDraft, now_ms: i64) -> Toggled {
        if self.remove(&draft.id, draft.kind) {
            Toggled::Removed
        } else {
            self.add(draft, now_ms);
            Toggled::Added
        }
    }

    pub fn is_favorite(&self, id: &str, kind: FavoriteKind) -> bool {
        self.items.iter().any(|f| f.id == id && f.kind == kind)
    }

    /// All favorites of one kind, preserving stored (most-recent-first) order.
    pub fn by_kind(&self, kind: FavoriteKind) -> Vec<&FavoriteItem> {
        self.items.iter().filter(|f| f.kind == kind).collect()
    }

    pub fn counts(&self) -> FavoriteCounts {
        let mut counts = FavoriteCounts::default();
        for item in &self.items {
            match item.kind {
                FavoriteKind::Event => counts.events += 1,
                FavoriteKind::Space => counts.spaces += 1,
                FavoriteKind::Spot => counts.spots += 1,
            }
        }
        counts
    }

    pub fn items(&self) -> &[FavoriteItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
