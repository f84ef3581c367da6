//! The seams between the controllers and the remote API
//!

use async_trait::async_trait;

use crate::api;
use crate::config::ClientConfig;
use crate::error::ArchiveError;
use crate::model::{Comment, Entry, Session, User};
use crate::opts::ListEntriesOpts;
use crate::view::{AuthResponse, Credentials, EntryDraft, LikeStatus, PaginatedEntries, Registration};

/// Everything the views read and write about entries
#[async_trait]
pub trait EntrySource: Send + Sync {
    async fn list_entries(&self, opts: &ListEntriesOpts) -> Result<PaginatedEntries, ArchiveError>;

    async fn get_entry_by_slug(&self, slug: &str) -> Result<Option<Entry>, ArchiveError>;

    async fn get_entry_by_id(&self, id: &str) -> Result<Option<Entry>, ArchiveError>;

    async fn create_entry(&self, session: &Session, draft: &EntryDraft) -> Result<Entry, ArchiveError>;

    async fn update_entry(
        &self,
        session: &Session,
        id: &str,
        draft: &EntryDraft,
    ) -> Result<Entry, ArchiveError>;

    async fn delete_entry(&self, session: &Session, id: &str) -> Result<(), ArchiveError>;

    async fn toggle_like(&self, session: &Session, id: &str) -> Result<LikeStatus, ArchiveError>;

    async fn add_comment(
        &self,
        session: &Session,
        id: &str,
        text: &str,
    ) -> Result<Vec<Comment>, ArchiveError>;

    async fn delete_comment(
        &self,
        session: &Session,
        id: &str,
        comment_id: &str,
    ) -> Result<(), ArchiveError>;
}

/// Token issuance, owned by the server
#[async_trait]
pub trait AuthSource: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ArchiveError>;

    async fn register(&self, registration: &Registration) -> Result<AuthResponse, ArchiveError>;

    async fn profile(&self, bearer_token: &str) -> Result<User, ArchiveError>;
}

/// The archive's REST API at `base_url`
#[derive(Debug, Clone)]
pub struct RemoteArchive {
    base_url: String,
}

impl RemoteArchive {
    pub fn new(base_url: impl AsRef<str>) -> RemoteArchive {
        RemoteArchive {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the base url from the environment and the client config
    pub fn from_config() -> Result<RemoteArchive, ArchiveError> {
        let config = ClientConfig::get()?;
        Ok(RemoteArchive::new(config.resolve_api_url()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Host the stored bearer token is keyed by
    pub fn host(&self) -> Result<String, ArchiveError> {
        api::client::get_host_from_url(self.base_url.as_str())
    }

    pub async fn sitemap(&self) -> Result<String, ArchiveError> {
        api::client::sitemap::get(&self.base_url).await
    }
}

#[async_trait]
impl EntrySource for RemoteArchive {
    async fn list_entries(&self, opts: &ListEntriesOpts) -> Result<PaginatedEntries, ArchiveError> {
        api::client::entries::list(&self.base_url, opts).await
    }

    async fn get_entry_by_slug(&self, slug: &str) -> Result<Option<Entry>, ArchiveError> {
        api::client::entries::get_by_slug(&self.base_url, slug).await
    }

    async fn get_entry_by_id(&self, id: &str) -> Result<Option<Entry>, ArchiveError> {
        api::client::entries::get_by_id(&self.base_url, id).await
    }

    async fn create_entry(&self, session: &Session, draft: &EntryDraft) -> Result<Entry, ArchiveError> {
        api::client::entries::create(&self.base_url, session, draft).await
    }

    async fn update_entry(
        &self,
        session: &Session,
        id: &str,
        draft: &EntryDraft,
    ) -> Result<Entry, ArchiveError> {
        api::client::entries::update(&self.base_url, session, id, draft).await
    }

    async fn delete_entry(&self, session: &Session, id: &str) -> Result<(), ArchiveError> {
        api::client::entries::delete(&self.base_url, session, id).await
    }

    async fn toggle_like(&self, session: &Session, id: &str) -> Result<LikeStatus, ArchiveError> {
        api::client::entries::like(&self.base_url, session, id).await
    }

    async fn add_comment(
        &self,
        session: &Session,
        id: &str,
        text: &str,
    ) -> Result<Vec<Comment>, ArchiveError> {
        api::client::entries::add_comment(&self.base_url, session, id, text).await
    }

    async fn delete_comment(
        &self,
        session: &Session,
        id: &str,
        comment_id: &str,
    ) -> Result<(), ArchiveError> {
        api::client::entries::delete_comment(&self.base_url, session, id, comment_id).await
    }
}

#[async_trait]
impl AuthSource for RemoteArchive {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ArchiveError> {
        api::client::auth::login(&self.base_url, credentials).await
    }

    async fn register(&self, registration: &Registration) -> Result<AuthResponse, ArchiveError> {
        api::client::auth::register(&self.base_url, registration).await
    }

    async fn profile(&self, bearer_token: &str) -> Result<User, ArchiveError> {
        api::client::auth::profile(&self.base_url, bearer_token).await
    }
}
