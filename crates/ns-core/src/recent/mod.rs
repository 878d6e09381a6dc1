//! Recent search terms: a bounded, de-duplicated, most-recent-first list.

/// Terms kept beyond this count are dropped from the tail.
pub const MAX_RECENT_TERMS: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct RecentSearches {
    terms: Vec<String>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted terms, re-applying the dedup and cap invariants.
    pub fn from_terms(terms: Vec<String>) -> Self {
        let mut recent = Self::new();
        for term in terms.into_iter().rev() {
            recent.add(&term);
        }
        recent
    }

    /// Move `term` to the front, dropping any case-sensitive-equal entry and
    /// truncating to the cap.
    pub fn add(&mut self, term: &str) {
        self.terms.retain(|t| t != term);
        self.terms.insert(0, term.to_owned());
        self.terms.truncate(MAX_RECENT_TERMS);
    }

    /// Remove all occurrences of `term`. Returns whether the list changed.
    pub fn remove(&mut self, term: &str) -> bool {
        let before = self.terms.len();
        self.terms.retain(|t| t != term);
        self.terms.len() != before
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_adding_a_term_moves_it_to_the_front() {
        let mut recent = RecentSearches::new();
        recent.add("미술");
        recent.add("공연");
        recent.add("미술");
        assert_eq!(recent.terms(), ["미술", "공연"]);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let mut recent = RecentSearches::new();
        recent.add("Jazz");
        recent.add("jazz");
        assert_eq!(recent.terms(), ["jazz", "Jazz"]);
    }

    #[test]
    fn list_is_capped_at_eight() {
        let mut recent = RecentSearches::new();
        for i in 0..12 {
            recent.add(&format!("term-{i}"));
        }
        assert_eq!(recent.terms().len(), MAX_RECENT_TERMS);
        assert_eq!(recent.terms()[0], "term-11");
        assert_eq!(recent.terms()[7], "term-4");
    }

    #[test]
    fn remove_and_clear_empty_the_list() {
        let mut recent = RecentSearches::new();
        recent.add("a");
        recent.add("b");
        assert!(recent.remove("a"));
        assert!(!recent.remove("a"));
        assert_eq!(recent.terms(), ["b"]);
        recent.clear();
        assert!(recent.is_empty());
    }

    #[test]
    fn from_terms_preserves_stored_order() {
        let recent = RecentSearches::from_terms(vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(recent.terms(), ["a", "b"]);
    }
}
