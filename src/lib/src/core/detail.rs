//! Detail view of a single entry and the interactions it offers
//!
//! State machine: `Loading -> Loaded | NotFound`. Inside `Loaded` the like
//! flag and like count only change when the server confirms a toggle.
//!

use crate::core::listing::Reconciled;
use crate::core::session::SessionContext;
use crate::core::share::{self, ShareData, ShareOutcome, ShareTarget};
use crate::core::source::EntrySource;
use crate::error::ArchiveError;
use crate::model::{Comment, Entry, Session};

/// Result of a user action that may need a login first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server confirmed and local state now mirrors it
    Applied,
    /// No session, the frontend should send the user to the login page.
    /// Nothing was sent.
    LoginRequired,
    /// Nothing to do (blank comment), nothing was sent
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryInteraction {
    entry: Entry,
    liked: bool,
    like_count: usize,
    comment_input: String,
    current_image: usize,
}

impl EntryInteraction {
    /// `session` decides the initial like flag
    pub fn new(entry: Entry, session: Option<&Session>) -> EntryInteraction {
        let liked = session.is_some_and(|s| entry.is_liked_by(&s.user.id));
        let like_count = entry.like_count();
        EntryInteraction {
            entry,
            liked,
            like_count,
            comment_input: String::new(),
            current_image: 0,
        }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn like_count(&self) -> usize {
        self.like_count
    }

    pub fn comments(&self) -> &[Comment] {
        self.entry.comment_list()
    }

    pub fn comment_input(&self) -> &str {
        &self.comment_input
    }

    pub fn set_comment_input(&mut self, text: impl Into<String>) {
        self.comment_input = text.into();
    }

    /// Index into the image gallery
    pub fn current_image_index(&self) -> usize {
        self.current_image
    }

    pub fn current_image(&self) -> Option<&str> {
        self.entry
            .image_urls
            .get(self.current_image)
            .map(|url| url.as_str())
    }

    pub fn select_image(&mut self, index: usize) -> bool {
        if index >= self.entry.image_urls.len() {
            return false;
        }
        self.current_image = index;
        true
    }

    pub async fn toggle_like<S: EntrySource + ?Sized>(
        &mut self,
        ctx: &SessionContext,
        source: &S,
    ) -> Result<Outcome, ArchiveError> {
        let Some(session) = ctx.current_session() else {
            return Ok(Outcome::LoginRequired);
        };

        let status = source.toggle_like(session, &self.entry.id).await?;
        log::debug!(
            "like on {} confirmed: liked {} count {}",
            self.entry.id,
            status.is_liked,
            status.likes
        );
        self.liked = status.is_liked;
        self.like_count = status.likes;
        Ok(Outcome::Applied)
    }

    pub async fn submit_comment<S: EntrySource + ?Sized>(
        &mut self,
        ctx: &SessionContext,
        source: &S,
    ) -> Result<Outcome, ArchiveError> {
        let Some(session) = ctx.current_session() else {
            return Ok(Outcome::LoginRequired);
        };
        let text = self.comment_input.trim();
        if text.is_empty() {
            return Ok(Outcome::Ignored);
        }

        let comments = source.add_comment(session, &self.entry.id, text).await?;
        self.entry.comments = Some(comments);
        self.comment_input.clear();
        Ok(Outcome::Applied)
    }

    /// Native share when the target supports it, otherwise copy the permalink.
    /// Never fails: problems are logged and reported as [`ShareOutcome::Failed`].
    pub fn share<T: ShareTarget + ?Sized>(&self, target: &T, site_url: &str) -> ShareOutcome {
        let data = ShareData::for_entry(&self.entry, site_url);
        share::share(target, &data)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailPhase {
    Loading,
    Loaded(Box<EntryInteraction>),
    NotFound,
}

/// Handle for one issued detail fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    generation: u64,
    slug: String,
}

impl DetailTicket {
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug)]
pub struct DetailView {
    phase: DetailPhase,
    latest_generation: u64,
}

impl Default for DetailView {
    fn default() -> Self {
        DetailView {
            phase: DetailPhase::Loading,
            latest_generation: 0,
        }
    }
}

impl DetailView {
    pub fn new() -> DetailView {
        DetailView::default()
    }

    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    pub fn interaction(&self) -> Option<&EntryInteraction> {
        match &self.phase {
            DetailPhase::Loaded(interaction) => Some(&**interaction),
            _ => None,
        }
    }

    pub fn interaction_mut(&mut self) -> Option<&mut EntryInteraction> {
        match &mut self.phase {
            DetailPhase::Loaded(interaction) => Some(&mut **interaction),
            _ => None,
        }
    }

    pub fn begin(&mut self, slug: impl Into<String>) -> DetailTicket {
        self.latest_generation += 1;
        self.phase = DetailPhase::Loading;
        DetailTicket {
            generation: self.latest_generation,
            slug: slug.into(),
        }
    }

    /// A missing entry and a failed fetch both end in `NotFound`; the failure
    /// is logged.
    pub fn reconcile(
        &mut self,
        ticket: DetailTicket,
        result: Result<Option<Entry>, ArchiveError>,
        session: Option<&Session>,
    ) -> Reconciled {
        if ticket.generation != self.latest_generation {
            log::debug!("detail: dropping stale response for {}", ticket.slug);
            return Reconciled::Stale;
        }

        match result {
            Ok(Some(entry)) => {
                self.phase = DetailPhase::Loaded(Box::new(EntryInteraction::new(entry, session)));
                Reconciled::Applied
            }
            Ok(None) => {
                log::debug!("detail: no entry with slug {}", ticket.slug);
                self.phase = DetailPhase::NotFound;
                Reconciled::Applied
            }
            Err(err) => {
                log::error!("Error fetching entry {}: {err}", ticket.slug);
                self.phase = DetailPhase::NotFound;
                Reconciled::Failed
            }
        }
    }

    pub async fn load<S: EntrySource + ?Sized>(
        &mut self,
        source: &S,
        slug: impl Into<String>,
        session: Option<&Session>,
    ) -> Reconciled {
        let ticket = self.begin(slug);
        let result = source.get_entry_by_slug(ticket.slug()).await;
        self.reconcile(ticket, result, session)
    }
}
