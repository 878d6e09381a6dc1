//! In-memory search across the three datasets, plus the derived popular-genre
//! ranking and the randomized recommendation sample.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{CulturalEvent, CulturalSpace, NightViewSpot};

pub const EVENT_RESULT_CAP: usize = 6;
pub const SPACE_RESULT_CAP: usize = 4;
pub const SPOT_RESULT_CAP: usize = 4;
pub const POPULAR_GENRE_CAP: usize = 8;
pub const RECOMMENDED_COUNT: usize = 3;

/// A matching row and its positional index within the dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<'a, T> {
    pub index: usize,
    pub item: &'a T,
}

#[derive(Debug, Default)]
pub struct SearchResults<'a> {
    pub events: Vec<Hit<'a, CulturalEvent>>,
    pub spaces: Vec<Hit<'a, CulturalSpace>>,
    pub spots: Vec<Hit<'a, NightViewSpot>>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.spaces.is_empty() && self.spots.is_empty()
    }
}

/// Case-insensitive substring search over a fixed set of fields per dataset.
///
/// An empty query returns empty result lists for all three datasets: results
/// only appear once the user has started typing. Ordering is the original
/// dataset order, truncated per dataset.
pub fn search<'a>(
    query: &str,
    events: &'a [CulturalEvent],
    spaces: &'a [CulturalSpace],
    spots: &'a [NightViewSpot],
) -> SearchResults<'a> {
    if query.is_empty() {
        return SearchResults::default();
    }
    let needle = query.to_lowercase();

    SearchResults {
        events: collect_hits(events, EVENT_RESULT_CAP, |e| {
            contains(&e.title, &needle)
                || contains(&e.venue, &needle)
                || contains(&e.category_code, &needle)
                || contains(&e.district, &needle)
        }),
        spaces: collect_hits(spaces, SPACE_RESULT_CAP, |s| {
            contains(&s.name, &needle) || contains(&s.address, &needle)
        }),
        spots: collect_hits(spots, SPOT_RESULT_CAP, |s| {
            contains(&s.title, &needle) || contains(&s.address, &needle)
        }),
    }
}

fn contains(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn collect_hits<T>(items: &[T], cap: usize, matches: impl Fn(&T) -> bool) -> Vec<Hit<'_, T>> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(item))
        .take(cap)
        .map(|(index, item)| Hit { index, item })
        .collect()
}

/// One genre and how many events carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub name: String,
    pub count: usize,
}

/// Event genres ranked by occurrence count, descending, top eight. Ties keep
/// first-encountered order (the sort is stable).
pub fn popular_genres(events: &[CulturalEvent]) -> Vec<GenreCount> {
    let mut counts: Vec<GenreCount> = Vec::new();
    for event in events {
        if event.category_code.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|g| g.name == event.category_code) {
            Some(genre) => genre.count += 1,
            None => counts.push(GenreCount {
                name: event.category_code.clone(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(POPULAR_GENRE_CAP);
    counts
}

/// Three distinct events drawn at random. Recomputed per call; only the shape
/// is stable, never the selection.
pub fn recommended<'a, R: Rng + ?Sized>(
    events: &'a [CulturalEvent],
    rng: &mut R,
) -> Vec<Hit<'a, CulturalEvent>> {
    let mut indices: Vec<usize> = (0..events.len()).collect();
    indices.shuffle(rng);
    indices
        .into_iter()
        .take(RECOMMENDED_COUNT)
        .map(|index| Hit {
            index,
            item: &events[index],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str, place: &str, code: &str, gu: &str) -> CulturalEvent {
        serde_json::from_str(&format!(
            r#"{{"TITLE": "{title}", "PLACE": "{place}", "CODENAME": "{code}", "GUNAME": "{gu}"}}"#
        ))
        .unwrap()
    }

    fn space(name: &str, addr: &str) -> CulturalSpace {
        serde_json::from_str(&format!(r#"{{"FAC_NAME": "{name}", "ADDR": "{addr}"}}"#)).unwrap()
    }

    fn spot(title: &str, addr: &str) -> NightViewSpot {
        serde_json::from_str(&format!(r#"{{"TITLE": "{title}", "ADDR": "{addr}"}}"#)).unwrap()
    }

    #[test]
    fn empty_query_returns_nothing_regardless_of_data() {
        let events = vec![event("재즈 페스티벌", "서울숲", "콘서트", "성동구")];
        let spaces = vec![space("시립미술관", "중구")];
        let spots = vec![spot("남산", "용산구")];
        let results = search("", &events, &spaces, &spots);
        assert!(results.is_empty());
    }

    #[test]
    fn unmatched_query_returns_the_same_empty_shape() {
        let events = vec![event("재즈 페스티벌", "서울숲", "콘서트", "성동구")];
        let results = search("오페라", &events, &[], &[]);
        assert!(results.is_empty());
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let events = vec![event("Seoul Jazz Festival", "올림픽공원", "콘서트", "송파구")];
        let results = search("jazz", &events, &[], &[]);
        assert_eq!(results.events.len(), 1);
        assert_eq!(results.events[0].index, 0);
    }

    #[test]
    fn each_dataset_searches_its_own_fields() {
        let events = vec![event("행사", "세종문화회관", "전시/미술", "종로구")];
        let spaces = vec![space("북서울미술관", "노원구 동일로")];
        let spots = vec![spot("하늘공원", "마포구 하늘공원로")];

        // venue field only exists on events
        let by_venue = search("세종문화", &events, &spaces, &spots);
        assert_eq!(by_venue.events.len(), 1);
        assert!(by_venue.spaces.is_empty());

        // address matches spaces and spots
        let by_addr = search("노원구", &events, &spaces, &spots);
        assert_eq!(by_addr.spaces.len(), 1);
        assert!(by_addr.events.is_empty());
    }

    #[test]
    fn results_are_capped_per_dataset_in_dataset_order() {
        let events: Vec<CulturalEvent> = (0..10)
            .map(|i| event(&format!("공연 {i}"), "무대", "콘서트", "중구"))
            .collect();
        let results = search("공연", &events, &[], &[]);
        assert_eq!(results.events.len(), EVENT_RESULT_CAP);
        let indices: Vec<usize> = results.events.iter().map(|h| h.index).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn popular_genres_rank_by_count_with_stable_ties() {
        let events = vec![
            event("a", "", "전시/미술", ""),
            event("b", "", "콘서트", ""),
            event("c", "", "콘서트", ""),
            event("d", "", "국악", ""),
            event("e", "", "", ""),
        ];
        let genres = popular_genres(&events);
        assert_eq!(genres[0].name, "콘서트");
        assert_eq!(genres[0].count, 2);
        // tie between 전시/미술 and 국악 keeps encounter order
        assert_eq!(genres[1].name, "전시/미술");
        assert_eq!(genres[2].name, "국악");
    }

    #[test]
    fn recommended_is_three_distinct_items_from_the_input() {
        let events: Vec<CulturalEvent> = (0..20)
            .map(|i| event(&format!("행사 {i}"), "", "", ""))
            .collect();
        let mut rng = rand::rng();
        let picks = recommended(&events, &mut rng);
        assert_eq!(picks.len(), RECOMMENDED_COUNT);
        let mut indices: Vec<usize> = picks.iter().map(|h| h.index).collect();
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), RECOMMENDED_COUNT);
        assert!(indices.iter().all(|&i| i < events.len()));
    }

    #[test]
    fn recommended_returns_everything_when_fewer_than_three() {
        let events = vec![event("only", "", "", "")];
        let picks = recommended(&events, &mut rand::rng());
        assert_eq!(picks.len(), 1);
    }
}
