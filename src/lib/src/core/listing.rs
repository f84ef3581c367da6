//! Fetch-and-reconcile cycle for entry listings
//!
//! Each fetch is stamped with a generation. Only the response to the latest
//! generation may replace what is displayed; anything older is dropped when
//! it arrives. A failed fetch is logged and leaves the previous list up.
//!

use crate::core::source::EntrySource;
use crate::error::ArchiveError;
use crate::model::Entry;
use crate::opts::ListEntriesOpts;
use crate::view::PaginatedEntries;

/// Handle for one issued listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    opts: ListEntriesOpts,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn opts(&self) -> &ListEntriesOpts {
        &self.opts
    }
}

/// What happened to a response handed to [`ListingView::reconcile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    /// List and page count replaced
    Applied,
    /// A newer request was issued since, response dropped
    Stale,
    /// The request failed, previous list kept
    Failed,
}

/// What the listing should render right now
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListingDisplay<'a> {
    /// Nothing requested yet
    Idle,
    Loading,
    /// A completed fetch with zero results
    Empty,
    Entries(&'a [Entry]),
}

#[derive(Debug, Default)]
pub struct ListingView {
    entries: Vec<Entry>,
    total_pages: usize,
    latest_generation: u64,
    in_flight: Option<u64>,
    settled: bool,
    last_error: Option<String>,
}

impl ListingView {
    pub fn new() -> ListingView {
        ListingView::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Page count reported by the most recent applied fetch
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Message of the most recent failed fetch, cleared by the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn display(&self) -> ListingDisplay<'_> {
        if self.in_flight.is_some() {
            ListingDisplay::Loading
        } else if !self.settled {
            ListingDisplay::Idle
        } else if self.entries.is_empty() {
            ListingDisplay::Empty
        } else {
            ListingDisplay::Entries(&self.entries)
        }
    }

    /// Issues a new generation. Any ticket handed out before this one is
    /// stale from now on.
    pub fn begin(&mut self, opts: ListEntriesOpts) -> FetchTicket {
        self.latest_generation += 1;
        self.in_flight = Some(self.latest_generation);
        log::debug!(
            "listing: begin generation {} {:?}",
            self.latest_generation,
            opts
        );
        FetchTicket {
            generation: self.latest_generation,
            opts,
        }
    }

    pub fn reconcile(
        &mut self,
        ticket: FetchTicket,
        result: Result<PaginatedEntries, ArchiveError>,
    ) -> Reconciled {
        if ticket.generation != self.latest_generation {
            log::debug!(
                "listing: dropping stale generation {} (latest {})",
                ticket.generation,
                self.latest_generation
            );
            return Reconciled::Stale;
        }

        self.in_flight = None;
        self.settled = true;
        match result {
            Ok(page) => {
                self.entries = page.entries;
                self.total_pages = page.total_pages;
                self.last_error = None;
                Reconciled::Applied
            }
            Err(err) => {
                log::error!("Error fetching entries: {err}");
                self.last_error = Some(err.user_message());
                Reconciled::Failed
            }
        }
    }

    /// begin, fetch, reconcile
    pub async fn refresh<S: EntrySource + ?Sized>(
        &mut self,
        source: &S,
        opts: ListEntriesOpts,
    ) -> Reconciled {
        let ticket = self.begin(opts);
        let result = source.list_entries(ticket.opts()).await;
        self.reconcile(ticket, result)
    }
}
