use serde::{Deserialize, Serialize};

use super::Dataset;

/// User-facing grouping of the three datasets on the map and in search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Events,
    Spaces,
    Spots,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Events, Category::Spaces, Category::Spots];

    pub fn label(self) -> &'static str {
        match self {
            Category::Events => "문화행사",
            Category::Spaces => "문화공간",
            Category::Spots => "야경명소",
        }
    }

    pub fn dataset(self) -> Dataset {
        match self {
            Category::Events => Dataset::Events,
            Category::Spaces => Dataset::Spaces,
            Category::Spots => Dataset::Spots,
        }
    }
}

/// The active category selection driving the map and list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn includes(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "전체",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_includes_every_category() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.includes(category));
        }
    }

    #[test]
    fn single_filter_includes_only_its_category() {
        let filter = CategoryFilter::Only(Category::Events);
        assert!(filter.includes(Category::Events));
        assert!(!filter.includes(Category::Spaces));
        assert!(!filter.includes(Category::Spots));
    }
}
