use crate::constants::{ADMIN_LIST_LIMIT, FEATURED_LIMIT, FEATURED_SORT};
use crate::model::Category;

/// Parameters of `GET /entries`. Unset fields are left out of the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListEntriesOpts {
    pub search: Option<String>,
    pub category: Option<Category>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
    /// Server sort key, a leading `-` means descending
    pub sort: Option<String>,
}

impl ListEntriesOpts {
    /// Most viewed entries for the home page
    pub fn featured() -> ListEntriesOpts {
        ListEntriesOpts {
            limit: Some(FEATURED_LIMIT),
            sort: Some(FEATURED_SORT.to_string()),
            ..Default::default()
        }
    }

    /// Everything the admin table shows
    pub fn admin() -> ListEntriesOpts {
        ListEntriesOpts {
            limit: Some(ADMIN_LIST_LIMIT),
            ..Default::default()
        }
    }

    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = &self.search {
            params.push(("search", search.to_owned()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.as_str().to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(sort) = &self.sort {
            params.push(("sort", sort.to_owned()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_params() {
        let params = ListEntriesOpts::featured().to_query_params();
        assert_eq!(
            params,
            vec![("limit", "8".to_string()), ("sort", "-views".to_string())]
        );
    }

    #[test]
    fn test_params_in_fixed_order() {
        let opts = ListEntriesOpts {
            search: Some("stepwell".to_string()),
            category: Some(Category::AncientTech),
            page: Some(2),
            limit: Some(12),
            sort: None,
        };
        let keys: Vec<&str> = opts.to_query_params().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["search", "category", "page", "limit"]);
    }
}
