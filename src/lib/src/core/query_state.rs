//! Query-state controller for the explore listing
//!
//! The canonical query lives in the [`Location`]. The search box and the
//! category bar are a staging copy: typing changes nothing until the user
//! submits or picks a category, and every commit writes a fresh location with
//! the page reset to 1.
//!

use crate::model::query::normalize_search;
use crate::model::{CategoryFilter, Location, Query};
use crate::opts::ListEntriesOpts;

#[derive(Debug, Clone)]
pub struct QueryController {
    location: Location,
    search_input: String,
    category_input: CategoryFilter,
}

impl QueryController {
    pub fn from_location(location: Location) -> QueryController {
        let query = Query::from_location(&location);
        QueryController {
            location,
            search_input: query.search.unwrap_or_default(),
            category_input: query.category,
        }
    }

    /// The canonical location, what a bookmark or a shared link should hold
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn canonical_query(&self) -> Query {
        Query::from_location(&self.location)
    }

    /// Parameters of the listing fetch for the canonical query
    pub fn list_opts(&self) -> ListEntriesOpts {
        self.canonical_query().to_list_opts()
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn category_input(&self) -> CategoryFilter {
        self.category_input
    }

    /// Edits the staged search text without touching the canonical query
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    /// Commits the staged search and category. Returns whether the location changed.
    pub fn submit_search(&mut self) -> bool {
        let query = Query {
            search: normalize_search(Some(&self.search_input)),
            category: self.category_input,
            ..Default::default()
        };
        self.commit(query)
    }

    /// Selecting a category commits it immediately, together with whatever
    /// is staged in the search box.
    pub fn select_category(&mut self, category: CategoryFilter) -> bool {
        self.category_input = category;
        self.submit_search()
    }

    /// No-op on the last known page
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        let mut query = self.canonical_query();
        if query.page >= total_pages {
            log::debug!("next_page ignored on page {} of {}", query.page, total_pages);
            return false;
        }
        query.page += 1;
        self.commit(query)
    }

    /// No-op on page 1
    pub fn previous_page(&mut self) -> bool {
        let mut query = self.canonical_query();
        if query.page <= 1 {
            return false;
        }
        query.page -= 1;
        self.commit(query)
    }

    /// Jumps straight to `page`, clamped to `1..=total_pages`
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        let mut query = self.canonical_query();
        query.page = page.clamp(1, total_pages.max(1));
        self.commit(query)
    }

    /// Navigation from outside (history, a pasted link). The staged inputs
    /// follow the new canonical query.
    pub fn navigate(&mut self, location: Location) {
        *self = QueryController::from_location(location);
    }

    fn commit(&mut self, query: Query) -> bool {
        let location = query.to_location_at(self.location.path());
        if location == self.location {
            return false;
        }
        log::debug!("query_state: {} -> {}", self.location, location);
        self.location = location;
        true
    }
}
