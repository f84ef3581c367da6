// Catch all tests for the library: whole flows through the controllers

use std::time::Duration;

use libarchive::core::{
    DetailPhase, DetailView, EntrySource, ListingDisplay, ListingView, Outcome, QueryController,
    Reconciled, SessionContext,
};
use libarchive::error::ArchiveError;
use libarchive::model::{Category, CategoryFilter, Location};
use libarchive::opts::ListEntriesOpts;
use libarchive::test::{self, FakeArchive, MemoryTokenStore};

fn explore(location: &str) -> QueryController {
    QueryController::from_location(location.parse::<Location>().unwrap())
}

#[tokio::test]
async fn test_explore_search_filter_and_page() -> Result<(), ArchiveError> {
    test::init_test_env();
    let archive = FakeArchive::new();
    archive.add_entries(test::entries_in(Category::Temple, 30));
    archive.add_entries(test::entries_in(Category::Festival, 5));

    let mut query = explore("/explore");
    let mut listing = ListingView::new();

    query.select_category(CategoryFilter::Only(Category::Temple));
    assert_eq!(query.location().to_string(), "/explore?category=temple");
    listing.refresh(&archive, query.list_opts()).await;
    assert_eq!(listing.total_pages(), 3);
    assert_eq!(listing.entries().len(), 12);

    assert!(query.next_page(listing.total_pages()));
    assert!(query.next_page(listing.total_pages()));
    assert!(!query.next_page(listing.total_pages()));
    listing.refresh(&archive, query.list_opts()).await;
    assert_eq!(
        query.location().to_string(),
        "/explore?category=temple&page=3"
    );
    assert_eq!(listing.entries().len(), 6);

    // A new search goes back to page 1 and keeps the category
    query.set_search_input("temple-2");
    assert!(query.submit_search());
    assert_eq!(query.canonical_query().page, 1);
    listing.refresh(&archive, query.list_opts()).await;
    // temple-2 and temple-20 through temple-29
    assert_eq!(listing.entries().len(), 11);

    let calls = archive.list_calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[2],
        ListEntriesOpts {
            search: Some("temple-2".to_string()),
            category: Some(Category::Temple),
            page: Some(1),
            limit: Some(12),
            sort: None,
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_shared_link_restores_query_and_inputs() {
    let archive = FakeArchive::new();
    archive.add_entries(test::entries_in(Category::Festival, 14));

    let query = explore("https://bharat.example/explore?category=festival&page=2");
    assert_eq!(
        query.category_input(),
        CategoryFilter::Only(Category::Festival)
    );
    assert_eq!(query.search_input(), "");

    let mut listing = ListingView::new();
    listing.refresh(&archive, query.list_opts()).await;
    assert_eq!(listing.entries().len(), 2);
}

#[tokio::test]
async fn test_no_results_is_empty_state() {
    let archive = FakeArchive::new();
    archive.add_entries(test::entries_in(Category::Art, 3));

    let mut query = explore("/explore");
    query.set_search_input("zzzz");
    query.submit_search();

    let mut listing = ListingView::new();
    assert_eq!(
        listing.refresh(&archive, query.list_opts()).await,
        Reconciled::Applied
    );
    assert_eq!(listing.display(), ListingDisplay::Empty);
    assert_eq!(listing.total_pages(), 0);
}

#[tokio::test]
async fn test_slow_older_response_never_overwrites_newer() -> Result<(), ArchiveError> {
    let archive = FakeArchive::new();
    archive.add_entries(test::entries_in(Category::Temple, 30));
    // Page 1 is slow, page 2 answers right away
    archive.set_list_delay(1, Duration::from_millis(200));

    let mut query = explore("/explore?category=temple");
    let mut listing = ListingView::new();

    let first = listing.begin(query.list_opts());
    query.next_page(3);
    let second = listing.begin(query.list_opts());

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    for ticket in [first, second] {
        let archive = archive.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = archive.list_entries(ticket.opts()).await;
            let _ = tx.send((ticket, result));
        });
    }
    drop(tx);

    let mut outcomes = Vec::new();
    while let Some((ticket, result)) = rx.recv().await {
        let page = ticket.opts().page;
        outcomes.push((page, listing.reconcile(ticket, result)));
    }

    assert_eq!(
        outcomes,
        vec![(Some(2), Reconciled::Applied), (Some(1), Reconciled::Stale)]
    );
    assert_eq!(listing.entries()[0].slug, "temple-13");
    assert!(!listing.is_loading());
    Ok(())
}

#[tokio::test]
async fn test_detail_like_and_comment_flow() -> Result<(), ArchiveError> {
    let archive = FakeArchive::new();
    let mut entry = test::entry_fixture("E1", "hampi-temple");
    entry.likes = Some(vec!["U7".to_string()]);
    archive.add_entries(vec![entry]);

    // Anonymous reader can view but not like
    let anonymous = SessionContext::new(Box::new(MemoryTokenStore::new()));
    let mut view = DetailView::new();
    view.load(&archive, "hampi-temple", anonymous.current_session())
        .await;
    let interaction = view.interaction_mut().unwrap();
    assert_eq!(
        interaction.toggle_like(&anonymous, &archive).await?,
        Outcome::LoginRequired
    );
    assert_eq!(archive.like_calls(), 0);

    archive.set_auth_user(test::user("U1", "Asha"), "tok-1");
    let mut ctx = SessionContext::new(Box::new(MemoryTokenStore::new()));
    ctx.login(&archive, &test::credentials()).await?;

    let mut view = DetailView::new();
    view.load(&archive, "hampi-temple", ctx.current_session())
        .await;
    let interaction = view.interaction_mut().unwrap();
    assert!(!interaction.liked());

    interaction.toggle_like(&ctx, &archive).await?;
    assert!(interaction.liked());
    assert_eq!(interaction.like_count(), 2);

    interaction.toggle_like(&ctx, &archive).await?;
    assert!(!interaction.liked());
    assert_eq!(interaction.like_count(), 1);

    interaction.set_comment_input("Beautiful gopuram");
    assert_eq!(
        interaction.submit_comment(&ctx, &archive).await?,
        Outcome::Applied
    );
    assert_eq!(interaction.comments().len(), 1);
    assert_eq!(interaction.comments()[0].user_name, "Asha");

    // A reload shows what the server kept
    let mut view = DetailView::new();
    view.load(&archive, "hampi-temple", ctx.current_session())
        .await;
    match view.phase() {
        DetailPhase::Loaded(interaction) => {
            assert_eq!(interaction.like_count(), 1);
            assert_eq!(interaction.comments().len(), 1);
        }
        other => panic!("unexpected phase {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_unknown_slug_is_not_found() {
    let archive = FakeArchive::new();
    let mut view = DetailView::new();
    view.load(&archive, "no-such-entry", None).await;
    assert_eq!(view.phase(), &DetailPhase::NotFound);
}
