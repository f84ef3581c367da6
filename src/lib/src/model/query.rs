use crate::constants::{
    CATEGORY_PARAM, DEFAULT_PAGE_NUM, EXPLORE_PATH, PAGE_PARAM, PAGE_SIZE, SEARCH_PARAM,
};
use crate::model::{CategoryFilter, Location};
use crate::opts::ListEntriesOpts;

/// The canonical explore query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Trimmed, never empty
    pub search: Option<String>,
    pub category: CategoryFilter,
    /// Starts at 1
    pub page: usize,
}

impl Default for Query {
    fn default() -> Self {
        Query {
            search: None,
            category: CategoryFilter::All,
            page: DEFAULT_PAGE_NUM,
        }
    }
}

impl Query {
    pub fn new(search: Option<&str>, category: CategoryFilter) -> Query {
        Query {
            search: normalize_search(search),
            category,
            page: DEFAULT_PAGE_NUM,
        }
    }

    /// Reads the query out of a location. Missing or malformed values fall
    /// back to "no filter" and page 1.
    pub fn from_location(location: &Location) -> Query {
        let page = location
            .get(PAGE_PARAM)
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PAGE_NUM);

        Query {
            search: normalize_search(location.get(SEARCH_PARAM)),
            category: CategoryFilter::from_param(location.get(CATEGORY_PARAM)),
            page,
        }
    }

    /// Writes the query as an explore location. Defaults are left out so the
    /// link stays short: no `category=all`, no `page=1`.
    pub fn to_location(&self) -> Location {
        self.to_location_at(EXPLORE_PATH)
    }

    pub fn to_location_at(&self, path: &str) -> Location {
        let mut location = Location::new(path);
        if let Some(search) = &self.search {
            location.set(SEARCH_PARAM, search.as_str());
        }
        if let Some(category) = self.category.category() {
            location.set(CATEGORY_PARAM, category.as_str());
        }
        if self.page > DEFAULT_PAGE_NUM {
            location.set(PAGE_PARAM, self.page.to_string());
        }
        location
    }

    pub fn to_list_opts(&self) -> ListEntriesOpts {
        ListEntriesOpts {
            search: self.search.clone(),
            category: self.category.category(),
            page: Some(self.page),
            limit: Some(PAGE_SIZE),
            sort: None,
        }
    }
}

/// Trims free text, treating an empty result as no filter
pub fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
