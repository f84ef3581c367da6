use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{CARD_EXCERPT_LEN, ENTRY_PATH_PREFIX, META_DESCRIPTION_LEN};
use crate::model::{Category, Comment};
use crate::util;

/// Author reference the server embeds in an entry
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Author {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A user reference as the server sends it: populated with the user's
/// fields, or just the id when the reference was not populated
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum UserRef {
    Populated(Author),
    Id(String),
}

impl UserRef {
    pub fn id(&self) -> Option<&str> {
        match self {
            UserRef::Populated(author) => author.id.as_deref(),
            UserRef::Id(id) => Some(id.as_str()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            UserRef::Populated(author) => author.name.as_deref(),
            UserRef::Id(_) => None,
        }
    }
}

/// One archived article.
///
/// Everything the API may leave out is an `Option`. Callers should go through
/// the accessors below instead of reading the optional fields directly, so the
/// absent case is decided in one place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category: Category,
    pub image_urls: Vec<String>,
    pub content: String,
    pub location: String,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub views: Option<u64>,
    /// Ids of the users who liked the entry
    #[serde(default)]
    pub likes: Option<Vec<String>>,
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
    #[serde(default)]
    pub created_by: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entry {
    pub fn like_count(&self) -> usize {
        self.likes.as_ref().map_or(0, |likes| likes.len())
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes
            .as_ref()
            .is_some_and(|likes| likes.iter().any(|id| id == user_id))
    }

    pub fn view_count(&self) -> u64 {
        self.views.unwrap_or(0)
    }

    pub fn comment_list(&self) -> &[Comment] {
        self.comments.as_deref().unwrap_or(&[])
    }

    pub fn comment_count(&self) -> usize {
        self.comment_list().len()
    }

    pub fn keyword_list(&self) -> &[String] {
        self.keywords.as_deref().unwrap_or(&[])
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.image_urls.first().map(|url| url.as_str())
    }

    /// Meta description when set, otherwise the opening of the content
    pub fn description(&self) -> String {
        match &self.meta_description {
            Some(desc) if !desc.trim().is_empty() => desc.to_owned(),
            _ => util::str::truncate_chars(&self.content, META_DESCRIPTION_LEN),
        }
    }

    /// Short teaser used on listing cards
    pub fn excerpt(&self) -> String {
        format!(
            "{}...",
            util::str::truncate_chars(&self.content, CARD_EXCERPT_LEN)
        )
    }

    pub fn author_name(&self) -> Option<&str> {
        self.created_by.as_ref().and_then(UserRef::name)
    }

    /// Path of the detail page, relative to the site origin
    pub fn path(&self) -> String {
        format!("{ENTRY_PATH_PREFIX}/{}", self.slug)
    }

    pub fn permalink(&self, site_url: &str) -> String {
        format!("{}{}", site_url.trim_end_matches('/'), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test;

    #[test]
    fn test_deserialize_sparse_entry() {
        let json = r#"{
            "_id": "E1",
            "slug": "hampi-temple",
            "title": "Virupaksha Temple",
            "category": "temple",
            "imageUrls": ["https://img.example/hampi.jpg"],
            "content": "Oldest functioning temple in Hampi.",
            "location": "Hampi, Karnataka"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "E1");
        assert_eq!(entry.like_count(), 0);
        assert_eq!(entry.comment_count(), 0);
        assert_eq!(entry.view_count(), 0);
        assert!(!entry.is_liked_by("U1"));
        assert!(entry.keyword_list().is_empty());
    }

    #[test]
    fn test_deserialize_full_entry() {
        let json = r#"{
            "_id": "E2",
            "slug": "konark",
            "title": "Konark Sun Temple",
            "category": "ancient-tech",
            "imageUrls": ["a.jpg", "b.jpg"],
            "content": "A chariot of stone.",
            "location": "Konark, Odisha",
            "metaDescription": "13th century sun temple",
            "keywords": ["sun", "chariot"],
            "views": 42,
            "likes": ["U1", "U2"],
            "comments": [
                {"_id": "C1", "userName": "Asha", "text": "Stunning", "createdAt": "2024-02-01T10:00:00.000Z"}
            ],
            "createdBy": {"_id": "A1", "name": "Admin"},
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-02T00:00:00.000Z"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.category, Category::AncientTech);
        assert_eq!(entry.like_count(), 2);
        assert!(entry.is_liked_by("U2"));
        assert_eq!(entry.comment_count(), 1);
        assert_eq!(entry.comment_list()[0].created_date(), "2024-02-01");
        assert_eq!(entry.author_name(), Some("Admin"));
        assert_eq!(entry.description(), "13th century sun temple");
    }

    #[test]
    fn test_deserialize_unpopulated_author() {
        let json = r#"{
            "_id": "E3",
            "slug": "rani-ki-vav",
            "title": "Rani ki Vav",
            "category": "temple",
            "imageUrls": ["vav.jpg"],
            "content": "A stepwell in Patan.",
            "location": "Patan, Gujarat",
            "createdBy": "64ab00000000000000000001"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(
            entry.created_by.as_ref().and_then(UserRef::id),
            Some("64ab00000000000000000001")
        );
        assert_eq!(entry.author_name(), None);
    }

    #[test]
    fn test_description_falls_back_to_content() {
        let mut entry = test::entry_fixture("E1", "long-read");
        entry.meta_description = Some("   ".to_string());
        entry.content = "x".repeat(400);
        assert_eq!(entry.description().chars().count(), META_DESCRIPTION_LEN);
    }

    #[test]
    fn test_permalink_joins_site_url() {
        let entry = test::entry_fixture("E1", "hampi-temple");
        assert_eq!(
            entry.permalink("https://bharat.example/"),
            "https://bharat.example/entry/hampi-temple"
        );
    }
}
