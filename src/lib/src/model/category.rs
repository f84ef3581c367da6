use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::ALL_CATEGORIES;
use crate::error::ArchiveError;

/// The fixed set of categories an entry can belong to
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Temple,
    AncientTech,
    Festival,
    Monument,
    Art,
    Tradition,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Temple,
        Category::AncientTech,
        Category::Festival,
        Category::Monument,
        Category::Art,
        Category::Tradition,
        Category::Other,
    ];

    /// Wire value, used in query strings and request bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Temple => "temple",
            Category::AncientTech => "ancient-tech",
            Category::Festival => "festival",
            Category::Monument => "monument",
            Category::Art => "art",
            Category::Tradition => "tradition",
            Category::Other => "other",
        }
    }

    /// Plural label for the explore filter bar
    pub fn label(&self) -> &'static str {
        match self {
            Category::Temple => "Temples",
            Category::AncientTech => "Ancient Technology",
            Category::Festival => "Festivals",
            Category::Monument => "Monuments",
            Category::Art => "Art & Culture",
            Category::Tradition => "Traditions",
            Category::Other => "Other",
        }
    }

    /// Badge shown on cards, "ancient-tech" becomes "ancient tech"
    pub fn badge(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| {
                let valid: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
                ArchiveError::validation(format!(
                    "Unknown category '{s}', expected one of: {}",
                    valid.join(", ")
                ))
            })
    }
}

/// Category filter of the explore listing, `all` means no filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn category(&self) -> Option<Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(*category),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Every choice in the order the filter bar shows them
    pub fn choices() -> Vec<CategoryFilter> {
        let mut choices = vec![CategoryFilter::All];
        choices.extend(Category::ALL.iter().map(|c| CategoryFilter::Only(*c)));
        choices
    }

    /// Parses a location parameter. Unknown values are treated as no filter
    /// so a hand-edited link still renders something.
    pub fn from_param(value: Option<&str>) -> CategoryFilter {
        match value {
            None => CategoryFilter::All,
            Some(value) => value.parse().unwrap_or_else(|err| {
                log::debug!("ignoring category param {value:?}: {err}");
                CategoryFilter::All
            }),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{ALL_CATEGORIES}"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.parse()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_values_round_trip_through_serde() {
        let json = serde_json::to_string(&Category::AncientTech).unwrap();
        assert_eq!(json, "\"ancient-tech\"");
        let parsed: Category = serde_json::from_str("\"monument\"").unwrap();
        assert_eq!(parsed, Category::Monument);
    }

    #[test]
    fn test_category_filter_all_sentinel() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "festival".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Festival)
        );
        assert!("castle".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_unknown_param_falls_back_to_all() {
        assert_eq!(CategoryFilter::from_param(Some("castle")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(None), CategoryFilter::All);
    }

    #[test]
    fn test_badge_replaces_dash() {
        assert_eq!(Category::AncientTech.badge(), "ancient tech");
    }

    #[test]
    fn test_choices_start_with_all() {
        let choices = CategoryFilter::choices();
        assert_eq!(choices.len(), 8);
        assert_eq!(choices[0], CategoryFilter::All);
    }
}
