use colored::Colorize;
use comfy_table::Table;

use libarchive::config::ClientConfig;
use libarchive::core::{
    AuthConfigTokenStore, DetailPhase, DetailView, ListingDisplay, RemoteArchive, SessionContext,
    ShareData, ShareTarget,
};
use libarchive::error::ArchiveError;
use libarchive::model::Entry;

/// Everything a command needs to talk to the archive
pub struct Context {
    pub archive: RemoteArchive,
    pub site_url: String,
    pub session: SessionContext,
}

impl Context {
    /// Resolves the API from config and picks up a stored login, if any
    pub async fn load() -> Result<Context, ArchiveError> {
        let config = ClientConfig::get()?;
        let archive = RemoteArchive::new(config.resolve_api_url());
        let store = AuthConfigTokenStore::for_host(archive.host()?)?;
        let mut session = SessionContext::new(Box::new(store));
        if let Err(err) = session.restore(&archive).await {
            // Offline is fine for reads, the token is kept for next time
            log::debug!("could not restore session: {err}");
        }

        Ok(Context {
            archive,
            site_url: config.resolve_site_url(),
            session,
        })
    }

    /// Loads the detail view of `slug`, or a not found error
    pub async fn detail(&self, slug: &str) -> Result<DetailView, ArchiveError> {
        let mut view = DetailView::new();
        view.load(&self.archive, slug, self.session.current_session())
            .await;
        match view.phase() {
            DetailPhase::Loaded(_) => Ok(view),
            _ => Err(ArchiveError::entry_not_found(slug)),
        }
    }
}

pub fn entries_table(entries: &[Entry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "title", "category", "location", "views", "likes", "slug"]);
    for (i, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            format!("{}", i + 1),
            entry.title.to_owned(),
            entry.category.badge(),
            entry.location.to_owned(),
            entry.view_count().to_string(),
            entry.like_count().to_string(),
            entry.slug.to_owned(),
        ]);
    }
    table
}

pub fn print_listing(display: ListingDisplay<'_>) {
    match display {
        ListingDisplay::Idle | ListingDisplay::Loading => println!("Loading..."),
        ListingDisplay::Empty => println!("{}", "No entries found".yellow()),
        ListingDisplay::Entries(entries) => println!("{}", entries_table(entries)),
    }
}

pub fn print_entry(entry: &Entry, liked: bool, like_count: usize) {
    println!("{}", entry.title.bold());
    println!(
        "{}  {}  {} views",
        entry.category.badge().blue(),
        entry.location,
        entry.view_count()
    );
    if let Some(author) = entry.author_name() {
        println!("by {author}");
    }
    let heart = if liked { "♥".red() } else { "♡".normal() };
    println!("{heart} {like_count}  💬 {}", entry.comment_count());
    println!();
    println!("{}", entry.content);
    println!();

    if !entry.image_urls.is_empty() {
        println!("{}", "Images".bold());
        for url in &entry.image_urls {
            println!("  {url}");
        }
    }
    if !entry.keyword_list().is_empty() {
        println!("{} {}", "Keywords:".bold(), entry.keyword_list().join(", "));
    }

    println!();
    println!("{} ({})", "Comments".bold(), entry.comment_count());
    if entry.comment_list().is_empty() {
        println!("  No comments yet. Be the first to comment!");
    }
    for comment in entry.comment_list() {
        println!(
            "  {} {}  {}",
            comment.user_name.bold(),
            comment.created_date().dimmed(),
            comment.id.dimmed()
        );
        println!("    {}", comment.text);
    }
}

/// A terminal has no share sheet; "copying" prints the link
pub struct TerminalShareTarget;

impl ShareTarget for TerminalShareTarget {
    fn can_share(&self) -> bool {
        false
    }

    fn share(&self, data: &ShareData) -> Result<(), ArchiveError> {
        println!("{}\n{}\n{}", data.title, data.text, data.url);
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<(), ArchiveError> {
        println!("{text}");
        Ok(())
    }
}
