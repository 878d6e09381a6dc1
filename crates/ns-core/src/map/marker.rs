use crate::catalog::{Category, GeoPoint, ItemRef};

/// Opaque handle to a marker placed on the map surface. Issued by the
/// surface, meaningless outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u64);

const EVENT_COLOR: &str = "#ff6933";
const SPACE_COLOR: &str = "#10b981";
const SPOT_COLOR: &str = "#8b5cf6";
const SELECTED_COLOR: &str = "#ef4444";

const BASE_SIZE_PX: u32 = 28;
const SELECTED_SIZE_PX: u32 = 40;

/// Visual treatment of one marker: pin color and pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub size_px: u32,
}

impl MarkerStyle {
    pub fn category(category: Category) -> Self {
        let color = match category {
            Category::Events => EVENT_COLOR,
            Category::Spaces => SPACE_COLOR,
            Category::Spots => SPOT_COLOR,
        };
        Self {
            color,
            size_px: BASE_SIZE_PX,
        }
    }

    /// The single selected marker is red and enlarged, regardless of category.
    pub fn selected() -> Self {
        Self {
            color: SELECTED_COLOR,
            size_px: SELECTED_SIZE_PX,
        }
    }

    pub fn is_selected(self) -> bool {
        self == Self::selected()
    }
}

/// One visible marker: the surface handle, the item it stands for, and where
/// it sits. Ephemeral; rebuilt whenever the filter or a dataset changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerEntry {
    pub marker: MarkerId,
    pub item: ItemRef,
    pub category: Category,
    pub position: GeoPoint,
}
