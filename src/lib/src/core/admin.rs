//! Admin panel: entry form, access gate, and create/update/delete
//!
//! After any successful mutation the table is refetched from the server, it
//! is never patched locally.
//!

use crate::constants::{HOME_PATH, LOGIN_PATH};
use crate::core::listing::{ListingView, Reconciled};
use crate::core::session::SessionContext;
use crate::core::source::EntrySource;
use crate::error::ArchiveError;
use crate::model::{Category, Entry, Session};
use crate::opts::ListEntriesOpts;
use crate::util;
use crate::view::EntryDraft;

pub const ENTRY_CREATED: &str = "Entry created successfully!";
pub const ENTRY_UPDATED: &str = "Entry updated successfully!";
pub const ENTRY_DELETED: &str = "Entry deleted successfully!";

/// Who may open the admin panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAccess {
    Granted,
    /// Anonymous, send to the login page
    LoginRequired,
    /// Logged in without the admin role, send home
    Forbidden,
}

impl AdminAccess {
    pub fn check(ctx: &SessionContext) -> AdminAccess {
        match ctx.current_session() {
            None => AdminAccess::LoginRequired,
            Some(session) if session.is_admin() => AdminAccess::Granted,
            Some(_) => AdminAccess::Forbidden,
        }
    }

    /// Where the frontend should go instead of showing the panel
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            AdminAccess::Granted => None,
            AdminAccess::LoginRequired => Some(LOGIN_PATH),
            AdminAccess::Forbidden => Some(HOME_PATH),
        }
    }
}

/// Editable form fields, kept as raw text until validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub title: String,
    pub category: Category,
    /// One text field per image, blanks allowed while editing
    pub image_urls: Vec<String>,
    pub content: String,
    pub location: String,
    pub meta_description: String,
    /// Comma separated
    pub keywords: String,
}

impl Default for EntryForm {
    fn default() -> Self {
        EntryForm {
            title: String::new(),
            category: Category::Temple,
            image_urls: vec![String::new()],
            content: String::new(),
            location: String::new(),
            meta_description: String::new(),
            keywords: String::new(),
        }
    }
}

impl EntryForm {
    pub fn new() -> EntryForm {
        EntryForm::default()
    }

    /// Prefilled from an existing entry for editing
    pub fn from_entry(entry: &Entry) -> EntryForm {
        EntryForm {
            title: entry.title.to_owned(),
            category: entry.category,
            image_urls: entry.image_urls.to_owned(),
            content: entry.content.to_owned(),
            location: entry.location.to_owned(),
            meta_description: entry.meta_description.clone().unwrap_or_default(),
            keywords: entry.keyword_list().join(", "),
        }
    }

    pub fn add_image_url_field(&mut self) {
        self.image_urls.push(String::new());
    }

    pub fn set_image_url(&mut self, index: usize, url: impl Into<String>) -> bool {
        match self.image_urls.get_mut(index) {
            Some(slot) => {
                *slot = url.into();
                true
            }
            None => false,
        }
    }

    pub fn remove_image_url_field(&mut self, index: usize) -> bool {
        if index >= self.image_urls.len() {
            return false;
        }
        self.image_urls.remove(index);
        true
    }

    /// Checks the required fields and builds the request body
    pub fn validate(&self) -> Result<EntryDraft, ArchiveError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ArchiveError::validation("Title is required"));
        }

        let image_urls: Vec<String> = self
            .image_urls
            .iter()
            .map(|url| url.trim())
            .filter(|url| !url.is_empty())
            .map(String::from)
            .collect();
        if image_urls.is_empty() {
            return Err(ArchiveError::validation("At least one image URL is required"));
        }

        let location = self.location.trim();
        if location.is_empty() {
            return Err(ArchiveError::validation("Location is required"));
        }
        if self.content.trim().is_empty() {
            return Err(ArchiveError::validation("Content is required"));
        }

        let meta_description = match self.meta_description.trim() {
            "" => None,
            desc => Some(desc.to_string()),
        };

        Ok(EntryDraft {
            title: title.to_string(),
            category: self.category,
            image_urls,
            content: self.content.to_owned(),
            location: location.to_string(),
            meta_description,
            keywords: util::str::split_and_trim(&self.keywords, ","),
        })
    }
}

#[derive(Debug, Default)]
pub struct AdminPanel {
    listing: ListingView,
    form: EntryForm,
    /// Id of the entry being edited, `None` while creating
    editing: Option<String>,
    form_open: bool,
}

impl AdminPanel {
    pub fn new() -> AdminPanel {
        AdminPanel::default()
    }

    pub fn listing(&self) -> &ListingView {
        &self.listing
    }

    pub fn entries(&self) -> &[Entry] {
        self.listing.entries()
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Shows or hides the form without touching its fields
    pub fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
    }

    pub fn edit(&mut self, entry: &Entry) {
        self.form = EntryForm::from_entry(entry);
        self.editing = Some(entry.id.to_owned());
        self.form_open = true;
    }

    pub fn cancel(&mut self) {
        self.form_open = false;
        self.editing = None;
        self.form = EntryForm::new();
    }

    pub async fn refresh<S: EntrySource + ?Sized>(&mut self, source: &S) -> Reconciled {
        self.listing.refresh(source, ListEntriesOpts::admin()).await
    }

    /// Creates or updates depending on the editing state. Returns the
    /// confirmation to show. On failure the form keeps its contents.
    pub async fn submit<S: EntrySource + ?Sized>(
        &mut self,
        ctx: &SessionContext,
        source: &S,
    ) -> Result<&'static str, ArchiveError> {
        let session = require_admin(ctx)?;
        let draft = self.form.validate()?;

        let message = match &self.editing {
            Some(id) => {
                source.update_entry(session, id, &draft).await?;
                ENTRY_UPDATED
            }
            None => {
                source.create_entry(session, &draft).await?;
                ENTRY_CREATED
            }
        };
        log::debug!("admin: {message} ({})", draft.title);

        self.cancel();
        self.refresh(source).await;
        Ok(message)
    }

    pub async fn delete<S: EntrySource + ?Sized>(
        &mut self,
        ctx: &SessionContext,
        source: &S,
        id: &str,
    ) -> Result<&'static str, ArchiveError> {
        let session = require_admin(ctx)?;
        source.delete_entry(session, id).await?;
        if self.editing.as_deref() == Some(id) {
            self.cancel();
        }
        self.refresh(source).await;
        Ok(ENTRY_DELETED)
    }

    /// Removes one comment. The server decides whether the caller may.
    pub async fn delete_comment<S: EntrySource + ?Sized>(
        &mut self,
        ctx: &SessionContext,
        source: &S,
        entry_id: &str,
        comment_id: &str,
    ) -> Result<(), ArchiveError> {
        let session = ctx.require_session()?;
        source.delete_comment(session, entry_id, comment_id).await?;
        self.refresh(source).await;
        Ok(())
    }
}

fn require_admin(ctx: &SessionContext) -> Result<&Session, ArchiveError> {
    let session = ctx.require_session()?;
    if !session.is_admin() {
        return Err(ArchiveError::admin_required());
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{self, FakeArchive, MemoryTokenStore};

    async fn admin_ctx(archive: &FakeArchive) -> SessionContext {
        archive.set_auth_user(test::admin_user(), "tok-admin");
        let mut ctx = SessionContext::new(Box::new(MemoryTokenStore::new()));
        ctx.login(archive, &test::credentials()).await.unwrap();
        ctx
    }

    fn filled_form() -> EntryForm {
        EntryForm {
            title: "  Konark Sun Temple ".to_string(),
            category: Category::Monument,
            image_urls: vec![
                "".to_string(),
                "https://img.example/konark.jpg".to_string(),
                "  ".to_string(),
            ],
            content: "A chariot of stone.".to_string(),
            location: "Konark, Odisha".to_string(),
            meta_description: "".to_string(),
            keywords: " sun, , chariot ,odisha".to_string(),
        }
    }

    #[test]
    fn test_validate_filters_blank_urls_and_splits_keywords() -> Result<(), ArchiveError> {
        let draft = filled_form().validate()?;
        assert_eq!(draft.title, "Konark Sun Temple");
        assert_eq!(draft.image_urls, vec!["https://img.example/konark.jpg"]);
        assert_eq!(draft.keywords, vec!["sun", "chariot", "odisha"]);
        assert_eq!(draft.meta_description, None);
        Ok(())
    }

    #[test]
    fn test_validate_requires_an_image() {
        let mut form = filled_form();
        form.image_urls = vec!["".to_string(), "   ".to_string()];
        let err = form.validate().unwrap_err();
        assert!(matches!(err, ArchiveError::ValidationFailure(_)));
    }

    #[test]
    fn test_validate_requires_title_location_content() {
        let clears: [fn(&mut EntryForm); 3] = [
            |f| f.title.clear(),
            |f| f.location = " ".to_string(),
            |f| f.content.clear(),
        ];
        for clear in clears {
            let mut form = filled_form();
            clear(&mut form);
            assert!(matches!(
                form.validate(),
                Err(ArchiveError::ValidationFailure(_))
            ));
        }
    }

    #[test]
    fn test_form_from_entry_round_trips_keywords() {
        let mut entry = test::entry_fixture("E1", "konark");
        entry.keywords = Some(vec!["sun".to_string(), "chariot".to_string()]);
        let form = EntryForm::from_entry(&entry);
        assert_eq!(form.keywords, "sun, chariot");
        assert_eq!(form.meta_description, "");
    }

    #[test]
    fn test_image_url_fields() {
        let mut form = EntryForm::new();
        assert_eq!(form.image_urls.len(), 1);
        form.add_image_url_field();
        assert!(form.set_image_url(1, "b.jpg"));
        assert!(!form.set_image_url(5, "c.jpg"));
        assert!(form.remove_image_url_field(0));
        assert_eq!(form.image_urls, vec!["b.jpg"]);
    }

    #[tokio::test]
    async fn test_access_gate() {
        let archive = FakeArchive::new();
        let anonymous = SessionContext::new(Box::new(MemoryTokenStore::new()));
        assert_eq!(AdminAccess::check(&anonymous), AdminAccess::LoginRequired);
        assert_eq!(AdminAccess::LoginRequired.redirect_path(), Some("/login"));

        archive.set_auth_user(test::user("U1", "Asha"), "tok-1");
        let mut reader = SessionContext::new(Box::new(MemoryTokenStore::new()));
        reader.login(&archive, &test::credentials()).await.unwrap();
        assert_eq!(AdminAccess::check(&reader), AdminAccess::Forbidden);
        assert_eq!(AdminAccess::Forbidden.redirect_path(), Some("/"));

        let admin = admin_ctx(&archive).await;
        assert_eq!(AdminAccess::check(&admin), AdminAccess::Granted);
    }

    #[tokio::test]
    async fn test_create_resets_form_and_refreshes() -> Result<(), ArchiveError> {
        let archive = FakeArchive::new();
        let ctx = admin_ctx(&archive).await;
        let mut panel = AdminPanel::new();
        panel.toggle_form();
        *panel.form_mut() = filled_form();

        let message = panel.submit(&ctx, &archive).await?;
        assert_eq!(message, ENTRY_CREATED);
        assert!(!panel.is_form_open());
        assert_eq!(panel.form(), &EntryForm::new());
        assert_eq!(panel.entries().len(), 1);
        assert_eq!(panel.entries()[0].title, "Konark Sun Temple");

        let calls = archive.list_calls();
        assert_eq!(calls.last().unwrap().limit, Some(100));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_uses_editing_id() -> Result<(), ArchiveError> {
        let archive = FakeArchive::new();
        let ctx = admin_ctx(&archive).await;
        let entry = test::entry_fixture("E1", "konark");
        archive.add_entries(vec![entry.clone()]);

        let mut panel = AdminPanel::new();
        panel.edit(&entry);
        assert_eq!(panel.editing_id(), Some("E1"));
        panel.form_mut().title = "Konark, renamed".to_string();

        let message = panel.submit(&ctx, &archive).await?;
        assert_eq!(message, ENTRY_UPDATED);
        assert_eq!(panel.editing_id(), None);
        assert_eq!(panel.entries()[0].title, "Konark, renamed");
        Ok(())
    }

    #[tokio::test]
    async fn test_server_rejection_keeps_form() {
        let archive = FakeArchive::new();
        let ctx = admin_ctx(&archive).await;
        let mut panel = AdminPanel::new();
        *panel.form_mut() = filled_form();

        archive.fail_next(ArchiveError::server_error("Slug already exists"));
        let err = panel.submit(&ctx, &archive).await.unwrap_err();
        assert_eq!(err.user_message(), "Slug already exists");
        assert_eq!(panel.form(), &filled_form());
    }

    #[tokio::test]
    async fn test_non_admin_cannot_submit() {
        let archive = FakeArchive::new();
        archive.set_auth_user(test::user("U1", "Asha"), "tok-1");
        let mut ctx = SessionContext::new(Box::new(MemoryTokenStore::new()));
        ctx.login(&archive, &test::credentials()).await.unwrap();

        let mut panel = AdminPanel::new();
        *panel.form_mut() = filled_form();
        let err = panel.submit(&ctx, &archive).await.unwrap_err();
        assert!(matches!(err, ArchiveError::Authentication(_)));
        assert!(archive.list_calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_refreshes() -> Result<(), ArchiveError> {
        let archive = FakeArchive::new();
        let ctx = admin_ctx(&archive).await;
        archive.add_entries(vec![
            test::entry_fixture("E1", "konark"),
            test::entry_fixture("E2", "hampi-temple"),
        ]);
        let mut panel = AdminPanel::new();
        panel.refresh(&archive).await;
        assert_eq!(panel.entries().len(), 2);

        assert_eq!(panel.delete(&ctx, &archive, "E1").await?, ENTRY_DELETED);
        let ids: Vec<&str> = panel.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["E2"]);
        Ok(())
    }
}
