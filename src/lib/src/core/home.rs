//! Home page: featured entries, the hero search box, category shortcuts

use crate::constants::{EXPLORE_PATH, SEARCH_PARAM};
use crate::core::listing::{ListingDisplay, ListingView, Reconciled};
use crate::core::source::EntrySource;
use crate::model::{Category, CategoryFilter, Location, Query};
use crate::opts::ListEntriesOpts;

/// Shortcuts shown under the hero, in display order
pub const FEATURED_CATEGORIES: [Category; 5] = [
    Category::Temple,
    Category::Festival,
    Category::AncientTech,
    Category::Monument,
    Category::Art,
];

#[derive(Debug, Default)]
pub struct HomeView {
    featured: ListingView,
    search_input: String,
}

impl HomeView {
    pub fn new() -> HomeView {
        HomeView::default()
    }

    /// Top entries by view count
    pub async fn load<S: EntrySource + ?Sized>(&mut self, source: &S) -> Reconciled {
        self.featured.refresh(source, ListEntriesOpts::featured()).await
    }

    pub fn featured(&self) -> ListingDisplay<'_> {
        self.featured.display()
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    /// Where submitting the hero search goes, `None` for a blank box
    pub fn submit_search(&self) -> Option<Location> {
        home_search_location(&self.search_input)
    }
}

pub fn home_search_location(term: &str) -> Option<Location> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    Some(Location::new(EXPLORE_PATH).with_param(SEARCH_PARAM, term))
}

/// Link target of a category shortcut
pub fn category_location(category: Category) -> Location {
    Query::new(None, CategoryFilter::Only(category)).to_location()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{self, FakeArchive};

    #[test]
    fn test_home_search_location() {
        assert_eq!(home_search_location("   "), None);
        let location = home_search_location("  sun temple ").unwrap();
        assert_eq!(location.to_string(), "/explore?search=sun+temple");
    }

    #[test]
    fn test_category_shortcut_links() {
        let links: Vec<String> = FEATURED_CATEGORIES
            .iter()
            .map(|c| category_location(*c).to_string())
            .collect();
        assert_eq!(links[0], "/explore?category=temple");
        assert_eq!(links[2], "/explore?category=ancient-tech");
    }

    #[tokio::test]
    async fn test_load_requests_most_viewed() {
        let archive = FakeArchive::new();
        archive.add_entries(test::entries_in(Category::Festival, 10));

        let mut home = HomeView::new();
        assert_eq!(home.featured(), ListingDisplay::Idle);
        assert_eq!(home.load(&archive).await, Reconciled::Applied);

        let calls = archive.list_calls();
        assert_eq!(calls, vec![ListEntriesOpts::featured()]);
        match home.featured() {
            ListingDisplay::Entries(entries) => assert_eq!(entries.len(), 8),
            other => panic!("unexpected display {other:?}"),
        }
    }
}
