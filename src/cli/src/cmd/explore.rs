use async_trait::async_trait;
use clap::{Arg, Command};
use colored::Colorize;
use dialoguer::{Input, Select};

use libarchive::constants::EXPLORE_PATH;
use libarchive::core::{EntrySource, ListingView, QueryController};
use libarchive::error::ArchiveError;
use libarchive::model::{CategoryFilter, Location, Query};

use crate::cmd::show;
use crate::cmd::RunCmd;
use crate::helpers::{self, Context};

pub const NAME: &str = "explore";
pub struct ExploreCmd;

#[async_trait]
impl RunCmd for ExploreCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Search and filter the archive, 12 entries per page")
            .arg(
                Arg::new("search")
                    .long("search")
                    .short('s')
                    .help("Search term")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("category")
                    .long("category")
                    .short('c')
                    .help("temple, ancient-tech, festival, monument, art, tradition, other or all")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("page")
                    .long("page")
                    .short('p')
                    .value_parser(clap::value_parser!(usize))
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("location")
                    .long("location")
                    .help("Open a shared link, e.g. '/explore?search=hampi&page=2'")
                    .conflicts_with_all(["search", "category", "page"])
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("interactive")
                    .long("interactive")
                    .short('i')
                    .help("Page and filter interactively")
                    .action(clap::ArgAction::SetTrue),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), ArchiveError> {
        let location = match args.get_one::<String>("location") {
            Some(location) => location.parse::<Location>()?,
            None => {
                let category = match args.get_one::<String>("category") {
                    Some(category) => category.parse::<CategoryFilter>()?,
                    None => CategoryFilter::All,
                };
                let mut query = Query::new(args.get_one::<String>("search").map(|s| s.as_str()), category);
                if let Some(page) = args.get_one::<usize>("page") {
                    query.page = (*page).max(1);
                }
                query.to_location_at(EXPLORE_PATH)
            }
        };

        let ctx = Context::load().await?;
        browse(&ctx, location, args.get_flag("interactive")).await
    }
}

enum Action {
    Next,
    Previous,
    Search(String),
    Category(CategoryFilter),
    Open(String),
    Quit,
}

/// Shows the listing for `location`; in interactive mode keeps going until quit
pub async fn browse(ctx: &Context, location: Location, interactive: bool) -> Result<(), ArchiveError> {
    let mut query = QueryController::from_location(location);
    let mut listing = ListingView::new();
    listing.refresh(&ctx.archive, query.list_opts()).await;

    loop {
        print_page(&query, &listing);
        if !interactive {
            return Ok(());
        }

        match prompt_action(&query, &listing)? {
            Action::Open(slug) => {
                show::print_detail(ctx, &slug, false).await?;
            }
            Action::Quit => return Ok(()),
            action => {
                if !apply(&ctx.archive, &mut query, &mut listing, action).await {
                    log::debug!("explore query unchanged, keeping the current listing");
                }
            }
        }
    }
}

/// Applies a query action; the listing is only fetched again when the
/// canonical query actually changed
async fn apply<S: EntrySource + ?Sized>(
    source: &S,
    query: &mut QueryController,
    listing: &mut ListingView,
    action: Action,
) -> bool {
    let changed = match action {
        Action::Next => query.next_page(listing.total_pages()),
        Action::Previous => query.previous_page(),
        Action::Search(term) => {
            query.set_search_input(term);
            query.submit_search()
        }
        Action::Category(category) => query.select_category(category),
        Action::Open(_) | Action::Quit => false,
    };
    if changed {
        listing.refresh(source, query.list_opts()).await;
    }
    changed
}

fn print_page(query: &QueryController, listing: &ListingView) {
    let canonical = query.canonical_query();
    println!("{}", query.location().to_string().dimmed());
    if let Some(err) = listing.last_error() {
        eprintln!("{}", err.red());
    }
    helpers::print_listing(listing.display());
    if listing.total_pages() > 1 {
        println!("Page {} of {}", canonical.page, listing.total_pages());
    }
}

fn prompt_action(query: &QueryController, listing: &ListingView) -> Result<Action, ArchiveError> {
    let page = query.canonical_query().page;
    let mut actions = Vec::new();
    if page < listing.total_pages() {
        actions.push("Next page");
    }
    if page > 1 {
        actions.push("Previous page");
    }
    actions.push("Search");
    actions.push("Category");
    if !listing.entries().is_empty() {
        actions.push("Open entry");
    }
    actions.push("Quit");

    let picked = Select::new()
        .items(&actions)
        .default(0)
        .interact()
        .map_err(|e| ArchiveError::basic_str(format!("Error reading action: {e}")))?;

    match actions[picked] {
        "Next page" => Ok(Action::Next),
        "Previous page" => Ok(Action::Previous),
        "Search" => {
            let term: String = Input::new()
                .with_prompt("Search")
                .with_initial_text(query.search_input())
                .allow_empty(true)
                .interact_text()
                .map_err(|e| ArchiveError::basic_str(format!("Error reading search: {e}")))?;
            Ok(Action::Search(term))
        }
        "Category" => {
            let choices = CategoryFilter::choices();
            let labels: Vec<&str> = choices.iter().map(|c| c.label()).collect();
            let current = choices
                .iter()
                .position(|c| *c == query.category_input())
                .unwrap_or(0);
            let picked = Select::new()
                .with_prompt("Category")
                .items(&labels)
                .default(current)
                .interact()
                .map_err(|e| ArchiveError::basic_str(format!("Error reading category: {e}")))?;
            Ok(Action::Category(choices[picked]))
        }
        "Open entry" => {
            let entries = listing.entries();
            let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
            let picked = Select::new()
                .with_prompt("Open entry")
                .items(&titles)
                .interact()
                .map_err(|e| ArchiveError::basic_str(format!("Error reading entry: {e}")))?;
            Ok(Action::Open(entries[picked].slug.to_owned()))
        }
        _ => Ok(Action::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libarchive::model::Category;
    use libarchive::test::{self, FakeArchive};

    async fn loaded(archive: &FakeArchive, location: &str) -> (QueryController, ListingView) {
        let query = QueryController::from_location(location.parse::<Location>().unwrap());
        let mut listing = ListingView::new();
        listing.refresh(archive, query.list_opts()).await;
        (query, listing)
    }

    #[tokio::test]
    async fn test_unchanged_query_does_not_refetch() {
        let archive = FakeArchive::new();
        archive.add_entries(test::entries_in(Category::Temple, 5));
        let (mut query, mut listing) = loaded(&archive, "/explore?category=temple").await;
        assert_eq!(archive.list_calls().len(), 1);

        // Single page, same category, same search text
        assert!(!apply(&archive, &mut query, &mut listing, Action::Next).await);
        assert!(!apply(&archive, &mut query, &mut listing, Action::Previous).await);
        let same = Action::Category(CategoryFilter::Only(Category::Temple));
        assert!(!apply(&archive, &mut query, &mut listing, same).await);
        assert!(!apply(&archive, &mut query, &mut listing, Action::Search(String::new())).await);
        assert!(!apply(&archive, &mut query, &mut listing, Action::Open("temple-1".to_string())).await);

        assert_eq!(archive.list_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_changed_query_refetches_once() {
        let archive = FakeArchive::new();
        archive.add_entries(test::entries_in(Category::Temple, 30));
        let (mut query, mut listing) = loaded(&archive, "/explore").await;

        assert!(apply(&archive, &mut query, &mut listing, Action::Next).await);
        assert_eq!(query.canonical_query().page, 2);
        assert!(apply(&archive, &mut query, &mut listing, Action::Search("temple-2".to_string())).await);

        let calls = archive.list_calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[2].search.as_deref(), Some("temple-2"));
        assert_eq!(calls[2].page, Some(1));
    }
}
