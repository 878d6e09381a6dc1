use crate::catalog::{
    Category, CategoryFilter, CulturalEvent, CulturalSpace, Dataset, ItemRef, NightViewSpot,
};
use crate::ports::MapSurfacePort;

use super::{MarkerEntry, MarkerId, MarkerStyle};

/// Synchronizes the set of visible markers with the active category filter
/// and the fetched datasets, and tracks the single selected marker.
///
/// Filter or dataset changes rebuild the whole marker set; selection changes
/// restyle exactly the two affected markers.
#[derive(Debug, Default)]
pub struct MarkerBoard {
    entries: Vec<MarkerEntry>,
    selected: Option<MarkerId>,
}

impl MarkerBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every placed marker, then place one marker per item of the
    /// datasets included under `filter` that has a usable coordinate pair.
    /// Items without one are skipped, never failing the batch. Any previous
    /// selection is cleared.
    pub fn rebuild(
        &mut self,
        surface: &dyn MapSurfacePort,
        filter: CategoryFilter,
        events: &[CulturalEvent],
        spaces: &[CulturalSpace],
        spots: &[NightViewSpot],
    ) {
        for entry in self.entries.drain(..) {
            surface.remove_marker(entry.marker);
        }
        self.selected = None;

        if filter.includes(Category::Events) {
            for (index, event) in events.iter().enumerate() {
                if let Some(position) = event.coordinate() {
                    self.place(surface, Dataset::Events, index, Category::Events, position);
                }
            }
        }
        if filter.includes(Category::Spaces) {
            for (index, space) in spaces.iter().enumerate() {
                if let Some(position) = space.coordinate() {
                    self.place(surface, Dataset::Spaces, index, Category::Spaces, position);
                }
            }
        }
        if filter.includes(Category::Spots) {
            for (index, spot) in spots.iter().enumerate() {
                if let Some(position) = spot.coordinate() {
                    self.place(surface, Dataset::Spots, index, Category::Spots, position);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(markers = self.entries.len(), filter = filter.label(), "marker board rebuilt");
    }

    fn place(
        &mut self,
        surface: &dyn MapSurfacePort,
        dataset: Dataset,
        index: usize,
        category: Category,
        position: crate::catalog::GeoPoint,
    ) {
        let marker = surface.place_marker(position, MarkerStyle::category(category));
        self.entries.push(MarkerEntry {
            marker,
            item: ItemRef::new(dataset, index),
            category,
            position,
        });
    }

    /// Select the clicked marker: restore the previously-selected marker to
    /// its category style, promote the new one, and recenter on it. Returns
    /// the item the marker stands for, or `None` for a stale handle.
    pub fn select(&mut self, surface: &dyn MapSurfacePort, marker: MarkerId) -> Option<ItemRef> {
        let entry = *self.entries.iter().find(|e| e.marker == marker)?;

        if let Some(previous) = self.selected.take() {
            if previous != marker {
                self.restore_style(surface, previous);
            }
        }
        surface.restyle_marker(marker, MarkerStyle::selected());
        surface.pan_to(entry.position);
        self.selected = Some(marker);
        Some(entry.item)
    }

    /// Drop the selection (detail panel closed), restoring the marker's
    /// category style.
    pub fn clear_selection(&mut self, surface: &dyn MapSurfacePort) {
        if let Some(previous) = self.selected.take() {
            self.restore_style(surface, previous);
        }
    }

    fn restore_style(&self, surface: &dyn MapSurfacePort, marker: MarkerId) {
        if let Some(entry) = self.entries.iter().find(|e| e.marker == marker) {
            surface.restyle_marker(marker, MarkerStyle::category(entry.category));
        }
    }

    pub fn selected_item(&self) -> Option<ItemRef> {
        let marker = self.selected?;
        self.entries
            .iter()
            .find(|e| e.marker == marker)
            .map(|e| e.item)
    }

    pub fn entries(&self) -> &[MarkerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::catalog::GeoPoint;

    /// In-memory surface recording placed markers and their current styles.
    #[derive(Default)]
    struct FakeSurface {
        next_id: AtomicU64,
        markers: Mutex<HashMap<MarkerId, (GeoPoint, MarkerStyle)>>,
        panned_to: Mutex<Vec<GeoPoint>>,
    }

    impl FakeSurface {
        fn visible(&self) -> usize {
            self.markers.lock().unwrap().len()
        }

        fn selected_count(&self) -> usize {
            self.markers
                .lock()
                .unwrap()
                .values()
                .filter(|(_, style)| style.is_selected())
                .count()
        }

        fn style_of(&self, marker: MarkerId) -> MarkerStyle {
            self.markers.lock().unwrap()[&marker].1
        }

        fn position_of(&self, marker: MarkerId) -> GeoPoint {
            self.markers.lock().unwrap()[&marker].0
        }
    }

    impl MapSurfacePort for FakeSurface {
        fn place_marker(&self, position: GeoPoint, style: MarkerStyle) -> MarkerId {
            let id = MarkerId(self.next_id.fetch_add(1, Ordering::Relaxed));
            self.markers.lock().unwrap().insert(id, (position, style));
            id
        }

        fn remove_marker(&self, marker: MarkerId) {
            self.markers.lock().unwrap().remove(&marker);
        }

        fn restyle_marker(&self, marker: MarkerId, style: MarkerStyle) {
            if let Some(slot) = self.markers.lock().unwrap().get_mut(&marker) {
                slot.1 = style;
            }
        }

        fn pan_to(&self, position: GeoPoint) {
            self.panned_to.lock().unwrap().push(position);
        }
    }

    fn event(lat: &str, lng: &str) -> CulturalEvent {
        serde_json::from_str(&format!(
            r#"{{"TITLE": "행사", "LAT": "{lat}", "LOT": "{lng}"}}"#
        ))
        .unwrap()
    }

    fn space(x: f64, y: f64) -> CulturalSpace {
        serde_json::from_str(&format!(
            r#"{{"FAC_NAME": "공간", "X_COORD": {x}, "Y_COORD": {y}}}"#
        ))
        .unwrap()
    }

    fn spot(lat: &str, lng: &str) -> NightViewSpot {
        serde_json::from_str(&format!(
            r#"{{"TITLE": "명소", "LA": "{lat}", "LO": "{lng}"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn rebuild_places_markers_for_all_included_datasets() {
        let surface = FakeSurface::default();
        let mut board = MarkerBoard::new();
        board.rebuild(
            &surface,
            CategoryFilter::All,
            &[event("37.57", "126.98")],
            &[space(37.52, 126.93)],
            &[spot("37.55", "126.99")],
        );
        assert_eq!(board.len(), 3);
        assert_eq!(surface.visible(), 3);
    }

    #[test]
    fn items_without_coordinates_are_silently_skipped() {
        let surface = FakeSurface::default();
        let mut board = MarkerBoard::new();
        board.rebuild(
            &surface,
            CategoryFilter::All,
            &[event("not-a-number", "126.98")],
            // (0,0) is the unknown-location sentinel for spaces
            &[space(0.0, 0.0), space(37.5, 127.0)],
            &[],
        );
        assert_eq!(board.len(), 1);
        assert_eq!(board.entries()[0].item, ItemRef::new(Dataset::Spaces, 1));
    }

    #[test]
    fn narrowing_the_filter_keeps_only_that_dataset() {
        let surface = FakeSurface::default();
        let mut board = MarkerBoard::new();
        let events = [event("37.57", "126.98")];
        let spaces = [space(37.52, 126.93)];
        let spots = [spot("37.55", "126.99")];

        board.rebuild(&surface, CategoryFilter::All, &events, &spaces, &spots);
        assert_eq!(surface.visible(), 3);

        board.rebuild(
            &surface,
            CategoryFilter::Only(Category::Events),
            &events,
            &spaces,
            &spots,
        );
        assert_eq!(surface.visible(), 1);
        let entry = board.entries()[0];
        assert_eq!(entry.item, ItemRef::new(Dataset::Events, 0));
        assert_eq!(surface.position_of(entry.marker), GeoPoint::new(37.57, 126.98));
    }

    #[test]
    fn selection_promotes_one_marker_and_pans() {
        let surface = FakeSurface::default();
        let mut board = MarkerBoard::new();
        board.rebuild(
            &surface,
            CategoryFilter::All,
            &[event("37.57", "126.98"), event("37.60", "127.01")],
            &[],
            &[],
        );
        let first = board.entries()[0].marker;
        let selected = board.select(&surface, first).unwrap();
        assert_eq!(selected, ItemRef::new(Dataset::Events, 0));
        assert!(surface.style_of(first).is_selected());
        assert_eq!(surface.panned_to.lock().unwrap().len(), 1);
    }

    #[test]
    fn at_most_one_marker_is_selected_at_a_time() {
        let surface = FakeSurface::default();
        let mut board = MarkerBoard::new();
        board.rebuild(
            &surface,
            CategoryFilter::All,
            &[event("37.57", "126.98"), event("37.60", "127.01")],
            &[],
            &[],
        );
        let (a, b) = (board.entries()[0].marker, board.entries()[1].marker);
        board.select(&surface, a);
        board.select(&surface, b);
        assert_eq!(surface.selected_count(), 1);
        assert!(surface.style_of(b).is_selected());
        assert_eq!(
            surface.style_of(a),
            MarkerStyle::category(Category::Events)
        );
    }

    #[test]
    fn clear_selection_restores_the_category_style() {
        let surface = FakeSurface::default();
        let mut board = MarkerBoard::new();
        board.rebuild(&surface, CategoryFilter::All, &[], &[], &[spot("37.5", "127.0")]);
        let marker = board.entries()[0].marker;
        board.select(&surface, marker);
        board.clear_selection(&surface);
        assert_eq!(surface.selected_count(), 0);
        assert_eq!(surface.style_of(marker), MarkerStyle::category(Category::Spots));
        assert!(board.selected_item().is_none());
    }

    #[test]
    fn rebuild_clears_the_selection() {
        let surface = FakeSurface::default();
        let mut board = MarkerBoard::new();
        let events = [event("37.57", "126.98")];
        board.rebuild(&surface, CategoryFilter::All, &events, &[], &[]);
        let marker = board.entries()[0].marker;
        board.select(&surface, marker);
        board.rebuild(
            &surface,
            CategoryFilter::Only(Category::Events),
            &events,
            &[],
            &[],
        );
        assert!(board.selected_item().is_none());
        assert_eq!(surface.selected_count(), 0);
    }

    #[test]
    fn selecting_a_stale_handle_is_a_no_op() {
        let surface = FakeSurface::default();
        let mut board = MarkerBoard::new();
        board.rebuild(&surface, CategoryFilter::All, &[], &[], &[]);
        assert!(board.select(&surface, MarkerId(42)).is_none());
        assert!(board.selected_item().is_none());
    }

    #[test]
    fn reselecting_the_same_marker_keeps_it_selected() {
        let surface = FakeSurface::default();
        let mut board = MarkerBoard::new();
        board.rebuild(&surface, CategoryFilter::All, &[event("37.5", "127.0")], &[], &[]);
        let marker = board.entries()[0].marker;
        board.select(&surface, marker);
        board.select(&surface, marker);
        assert_eq!(surface.selected_count(), 1);
        assert!(surface.style_of(marker).is_selected());
    }
}
