//! List-view queries over the event dataset: district/genre filters, sort
//! order, and pagination math.

use super::CulturalEvent;

pub const EVENTS_PER_PAGE: usize = 12;
/// At most this many page buttons are rendered at once.
const PAGE_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventSort {
    /// Most recently started first (`STRTDATE` descending).
    #[default]
    Latest,
    /// Closest end date first (`END_DATE` ascending).
    EndingSoon,
}

/// Filter and ordering for the event list page.
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub district: Option<String>,
    pub genre: Option<String>,
    pub sort: EventSort,
}

impl EventQuery {
    /// Matching events in display order, each carrying its dataset index.
    ///
    /// Upstream dates are `YYYY-MM-DD…` strings, so lexicographic comparison
    /// is the date ordering.
    pub fn apply<'a>(&self, events: &'a [CulturalEvent]) -> Vec<(usize, &'a CulturalEvent)> {
        let mut filtered: Vec<(usize, &CulturalEvent)> = events
            .iter()
            .enumerate()
            .filter(|(_, event)| {
                self.district
                    .as_deref()
                    .is_none_or(|gu| event.district == gu)
                    && self
                        .genre
                        .as_deref()
                        .is_none_or(|code| event.category_code == code)
            })
            .collect();

        match self.sort {
            EventSort::Latest => filtered.sort_by(|(_, a), (_, b)| {
                b.start_date
                    .as_deref()
                    .unwrap_or("")
                    .cmp(a.start_date.as_deref().unwrap_or(""))
            }),
            EventSort::EndingSoon => filtered.sort_by(|(_, a), (_, b)| {
                a.end_date
                    .as_deref()
                    .unwrap_or("")
                    .cmp(b.end_date.as_deref().unwrap_or(""))
            }),
        }

        filtered
    }
}

/// Unique district names (`GUNAME`), first-encountered order, empties dropped.
pub fn districts(events: &[CulturalEvent]) -> Vec<&str> {
    unique_non_empty(events.iter().map(|e| e.district.as_str()))
}

/// Unique genre codes (`CODENAME`), first-encountered order, empties dropped.
pub fn genres(events: &[CulturalEvent]) -> Vec<&str> {
    unique_non_empty(events.iter().map(|e| e.category_code.as_str()))
}

fn unique_non_empty<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// Pagination over a filtered list. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub total: usize,
    pub per_page: usize,
}

impl Page {
    pub fn new(number: usize, item_count: usize, per_page: usize) -> Self {
        let total = item_count.div_ceil(per_page).max(1);
        Self {
            number: number.clamp(1, total),
            total,
            per_page,
        }
    }

    /// Index range of this page's items within the filtered list.
    pub fn bounds(&self, item_count: usize) -> std::ops::Range<usize> {
        let start = (self.number - 1) * self.per_page;
        let end = (start + self.per_page).min(item_count);
        start.min(end)..end
    }

    /// The window of page numbers to render as buttons, centered on the
    /// current page and clamped to the ends.
    pub fn window(&self) -> Vec<usize> {
        if self.total <= PAGE_WINDOW {
            return (1..=self.total).collect();
        }
        let start = if self.number <= 3 {
            1
        } else if self.number >= self.total - 2 {
            self.total - (PAGE_WINDOW - 1)
        } else {
            self.number - 2
        };
        (start..start + PAGE_WINDOW).collect()
    }
}
