use serde::{Deserialize, Serialize};

use crate::model::{Category, Comment, Entry};

/// Body of `GET /entries`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedEntries {
    pub entries: Vec<Entry>,
    pub total_pages: usize,
    #[serde(default)]
    pub current_page: Option<usize>,
    #[serde(default)]
    pub total: Option<usize>,
}

impl PaginatedEntries {
    pub fn empty() -> PaginatedEntries {
        PaginatedEntries {
            entries: Vec::new(),
            total_pages: 0,
            current_page: None,
            total: None,
        }
    }
}

/// Body of `POST /entries/:id/like`. Both values are authoritative.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    pub is_liked: bool,
    pub likes: usize,
}

/// Body of `POST /entries/:id/comment`, the full comment list after the append
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CommentNew {
    pub text: String,
}

/// Request body of `POST /entries` and `PUT /entries/:id`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub title: String,
    pub category: Category,
    pub image_urls: Vec<String>,
    pub content: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    pub keywords: Vec<String>,
}
