use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

use crate::error::ArchiveError;

/// A navigable location: a path plus its query parameters, in order.
///
/// This is what the user can bookmark or share, so it is the canonical home of
/// the explore query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    path: String,
    params: Vec<(String, String)>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Location {
        Location {
            path: path.into(),
            params: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the value of `key` or appends it
    pub fn set(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        let key = key.as_ref();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some(param) => param.1 = value,
            None => self.params.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.params.retain(|(k, _)| k != key);
    }

    pub fn with_param(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Location {
        self.set(key, value);
        self
    }
}

impl FromStr for Location {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Full links, as shared from a browser
        if s.contains("://") {
            let url = url::Url::parse(s)?;
            return Ok(Location {
                path: url.path().to_string(),
                params: url
                    .query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect(),
            });
        }
        // Drop the fragment, it never carries query state
        let s = s.split_once('#').map_or(s, |(before, _)| before);
        let (path, query) = match s.split_once('?') {
            Some((path, query)) => (path, query),
            None => (s, ""),
        };
        if path.is_empty() && query.is_empty() {
            return Err(ArchiveError::basic_str("Location cannot be empty"));
        }
        let path = if path.is_empty() { "/" } else { path };

        let params = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Ok(Location {
            path: path.to_string(),
            params,
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            return write!(f, "{}", self.path);
        }
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish();
        write!(f, "{}?{}", self.path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_link() {
        let location: Location = "https://bharat.example/explore?category=festival&page=3#top"
            .parse()
            .unwrap();
        assert_eq!(location.path(), "/explore");
        assert_eq!(location.get("category"), Some("festival"));
        assert_eq!(location.get("page"), Some("3"));
    }

    #[test]
    fn test_parse_and_display() {
        let location: Location = "/explore?search=sun+temple&category=temple".parse().unwrap();
        assert_eq!(location.path(), "/explore");
        assert_eq!(location.get("search"), Some("sun temple"));
        assert_eq!(location.get("category"), Some("temple"));
        assert_eq!(
            location.to_string(),
            "/explore?search=sun+temple&category=temple"
        );
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut location: Location = "/explore?page=2&category=art".parse().unwrap();
        location.set("page", "3");
        location.remove("category");
        assert_eq!(location.to_string(), "/explore?page=3");
    }

    #[test]
    fn test_fragment_is_dropped() {
        let location: Location = "/entry/konark#comments".parse().unwrap();
        assert_eq!(location.path(), "/entry/konark");
        assert!(location.params().is_empty());
    }

    #[test]
    fn test_empty_is_rejected() {
        assert!("".parse::<Location>().is_err());
    }
}
