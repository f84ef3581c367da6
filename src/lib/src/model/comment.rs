use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::UserRef;

/// A reader comment on an entry. The server owns ordering and ids.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Author of the comment, as an id or a populated user
    #[serde(default)]
    pub user: Option<UserRef>,
    pub user_name: String,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().and_then(UserRef::id)
    }

    /// Date shown next to the author, empty when the server omitted it
    pub fn created_date(&self) -> String {
        match self.created_at {
            Some(created_at) => created_at.format("%Y-%m-%d").to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;

    #[test]
    fn test_deserialize_user_as_id_or_object() {
        let comments: Vec<Comment> = serde_json::from_str(
            r#"[
                {"_id": "C1", "user": "U1", "userName": "Asha", "text": "Lovely"},
                {"_id": "C2", "user": {"_id": "U2", "name": "Ravi"}, "userName": "Ravi", "text": "Agreed"},
                {"_id": "C3", "userName": "Meera", "text": "No user field"}
            ]"#,
        )
        .unwrap();
        assert_eq!(comments[0].user_id(), Some("U1"));
        assert_eq!(comments[1].user_id(), Some("U2"));
        assert_eq!(comments[2].user_id(), None);
        assert_eq!(comments[1].user_name, "Ravi");
    }

    #[test]
    fn test_entry_with_populated_comment_user() {
        let json = r#"{
            "_id": "E1",
            "slug": "hampi-temple",
            "title": "Virupaksha Temple",
            "category": "temple",
            "imageUrls": ["hampi.jpg"],
            "content": "Oldest functioning temple in Hampi.",
            "location": "Hampi, Karnataka",
            "comments": [
                {"_id": "C1", "user": {"_id": "U1", "name": "Asha"}, "userName": "Asha", "text": "Stunning"}
            ]
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.comment_count(), 1);
        assert_eq!(entry.comment_list()[0].user_id(), Some("U1"));
    }
}
