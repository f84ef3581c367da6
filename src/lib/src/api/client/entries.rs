use crate::api;
use crate::api::client;
use crate::api::endpoint::encode_segment;
use crate::error::ArchiveError;
use crate::model::{Comment, Entry, Session};
use crate::opts::ListEntriesOpts;
use crate::view::{CommentNew, CommentsResponse, EntryDraft, LikeStatus, PaginatedEntries};

/// List entries, filtered and paginated by `opts`
pub async fn list(base_url: &str, opts: &ListEntriesOpts) -> Result<PaginatedEntries, ArchiveError> {
    let url = api::endpoint::url_with_params(base_url, "/entries", &opts.to_query_params())?;
    log::debug!("api::client::entries::list {}", url);

    let client = client::new()?;
    let res = client.get(&url).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: PaginatedEntries = serde_json::from_str(&body)?;
    Ok(response)
}

/// Fetch one entry by slug, `None` if the server has no such entry
pub async fn get_by_slug(
    base_url: &str,
    slug: impl AsRef<str>,
) -> Result<Option<Entry>, ArchiveError> {
    let uri = format!("/entries/slug/{}", encode_segment(slug.as_ref()));
    get_optional(base_url, &uri).await
}

pub async fn get_by_id(base_url: &str, id: impl AsRef<str>) -> Result<Option<Entry>, ArchiveError> {
    let uri = format!("/entries/{}", encode_segment(id.as_ref()));
    get_optional(base_url, &uri).await
}

async fn get_optional(base_url: &str, uri: &str) -> Result<Option<Entry>, ArchiveError> {
    let url = api::endpoint::url_from_base(base_url, uri);
    log::debug!("api::client::entries::get {}", url);

    let client = client::new()?;
    let res = client.get(&url).send().await?;
    if reqwest::StatusCode::NOT_FOUND == res.status() {
        return Ok(None);
    }

    let body = client::parse_json_body(&url, res).await?;
    let entry: Entry = serde_json::from_str(&body)?;
    Ok(Some(entry))
}

/// Create a new entry (admin only)
pub async fn create(
    base_url: &str,
    session: &Session,
    draft: &EntryDraft,
) -> Result<Entry, ArchiveError> {
    let url = api::endpoint::url_from_base(base_url, "/entries");
    log::debug!("api::client::entries::create {}", url);

    let client = client::new_for_session(session)?;
    let res = client.post(&url).json(draft).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let entry: Entry = serde_json::from_str(&body)?;
    Ok(entry)
}

/// Replace the editable fields of an entry (admin only)
pub async fn update(
    base_url: &str,
    session: &Session,
    id: impl AsRef<str>,
    draft: &EntryDraft,
) -> Result<Entry, ArchiveError> {
    let uri = format!("/entries/{}", encode_segment(id.as_ref()));
    let url = api::endpoint::url_from_base(base_url, &uri);
    log::debug!("api::client::entries::update {}", url);

    let client = client::new_for_session(session)?;
    let res = client.put(&url).json(draft).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let entry: Entry = serde_json::from_str(&body)?;
    Ok(entry)
}

pub async fn delete(
    base_url: &str,
    session: &Session,
    id: impl AsRef<str>,
) -> Result<(), ArchiveError> {
    let uri = format!("/entries/{}", encode_segment(id.as_ref()));
    let url = api::endpoint::url_from_base(base_url, &uri);
    log::debug!("api::client::entries::delete {}", url);

    let client = client::new_for_session(session)?;
    let res = client.delete(&url).send().await?;
    client::parse_empty_body(&url, res).await
}

/// Toggle the session user's like. The returned status is authoritative.
pub async fn like(
    base_url: &str,
    session: &Session,
    id: impl AsRef<str>,
) -> Result<LikeStatus, ArchiveError> {
    let uri = format!("/entries/{}/like", encode_segment(id.as_ref()));
    let url = api::endpoint::url_from_base(base_url, &uri);
    log::debug!("api::client::entries::like {}", url);

    let client = client::new_for_session(session)?;
    let res = client.post(&url).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let status: LikeStatus = serde_json::from_str(&body)?;
    Ok(status)
}

/// Append a comment, returns the whole comment list as the server sees it
pub async fn add_comment(
    base_url: &str,
    session: &Session,
    id: impl AsRef<str>,
    text: impl AsRef<str>,
) -> Result<Vec<Comment>, ArchiveError> {
    let uri = format!("/entries/{}/comment", encode_segment(id.as_ref()));
    let url = api::endpoint::url_from_base(base_url, &uri);
    log::debug!("api::client::entries::add_comment {}", url);

    let params = CommentNew {
        text: text.as_ref().to_string(),
    };
    let client = client::new_for_session(session)?;
    let res = client.post(&url).json(&params).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: CommentsResponse = serde_json::from_str(&body)?;
    Ok(response.comments)
}

pub async fn delete_comment(
    base_url: &str,
    session: &Session,
    id: impl AsRef<str>,
    comment_id: impl AsRef<str>,
) -> Result<(), ArchiveError> {
    let uri = format!(
        "/entries/{}/comment/{}",
        encode_segment(id.as_ref()),
        encode_segment(comment_id.as_ref())
    );
    let url = api::endpoint::url_from_base(base_url, &uri);
    log::debug!("api::client::entries::delete_comment {}", url);

    let client = client::new_for_session(session)?;
    let res = client.delete(&url).send().await?;
    client::parse_empty_body(&url, res).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::test;

    #[tokio::test]
    async fn test_list_sends_query_params() -> Result<(), ArchiveError> {
        let mut server = mockito::Server::new_async().await;
        let base_url = format!("{}/api", server.url());

        let mock = server
            .mock("GET", "/api/entries")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("category".into(), "temple".into()),
                mockito::Matcher::UrlEncoded("page".into(), "2".into()),
                mockito::Matcher::UrlEncoded("limit".into(), "12".into()),
            ]))
            .with_status(200)
            .with_body(test::paginated_entries_json(&["E13", "E14"], 3))
            .create_async()
            .await;

        let opts = ListEntriesOpts {
            category: Some(Category::Temple),
            page: Some(2),
            limit: Some(12),
            ..Default::default()
        };
        let page = list(&base_url, &opts).await?;
        mock.assert_async().await;

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.entries.len(), 2);
        assert_eq!(page.entries[0].id, "E13");
        Ok(())
    }

    #[tokio::test]
    async fn test_get_by_slug_not_found_is_none() -> Result<(), ArchiveError> {
        let mut server = mockito::Server::new_async().await;
        let base_url = format!("{}/api", server.url());

        let _mock = server
            .mock("GET", "/api/entries/slug/hampi-temple")
            .with_status(404)
            .with_body(r#"{"message":"Entry not found"}"#)
            .create_async()
            .await;

        let entry = get_by_slug(&base_url, "hampi-temple").await?;
        assert!(entry.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_like_sends_bearer_token() -> Result<(), ArchiveError> {
        let mut server = mockito::Server::new_async().await;
        let base_url = format!("{}/api", server.url());
        let session = test::user_session("U1");

        let mock = server
            .mock("POST", "/api/entries/E1/like")
            .match_header("authorization", format!("Bearer {}", session.token).as_str())
            .with_status(200)
            .with_body(r#"{"isLiked": true, "likes": 5}"#)
            .create_async()
            .await;

        let status = like(&base_url, &session, "E1").await?;
        mock.assert_async().await;
        assert_eq!(
            status,
            LikeStatus {
                is_liked: true,
                likes: 5
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_create_surfaces_server_message() -> Result<(), ArchiveError> {
        let mut server = mockito::Server::new_async().await;
        let base_url = format!("{}/api", server.url());
        let session = test::admin_session();

        let _mock = server
            .mock("POST", "/api/entries")
            .with_status(400)
            .with_body(r#"{"message":"An entry with this title already exists"}"#)
            .create_async()
            .await;

        let result = create(&base_url, &session, &test::draft_fixture("Konark")).await;
        let err = result.unwrap_err();
        assert!(matches!(err, ArchiveError::ServerError(_)));
        assert_eq!(err.user_message(), "An entry with this title already exists");
        Ok(())
    }
}
