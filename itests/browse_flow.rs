use mockito::Matcher;

use libarchive::core::{DetailPhase, DetailView, ListingDisplay, ListingView, QueryController, Reconciled};
use libarchive::error::ArchiveError;
use libarchive::model::Location;
use libarchive::test;

use crate::common;

#[tokio::test]
async fn test_explore_listing_over_http() -> Result<(), ArchiveError> {
    let (mut server, archive) = common::archive_server().await;
    let query = QueryController::from_location(
        "/explore?search=sun&category=temple&page=2".parse::<Location>()?,
    );

    let mock = server
        .mock("GET", "/api/entries")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("search".into(), "sun".into()),
            Matcher::UrlEncoded("category".into(), "temple".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("limit".into(), "12".into()),
        ]))
        .with_status(200)
        .with_body(test::paginated_entries_json(&["E13", "E14", "E15"], 4))
        .expect(1)
        .create_async()
        .await;

    let mut listing = ListingView::new();
    assert_eq!(
        listing.refresh(&archive, query.list_opts()).await,
        Reconciled::Applied
    );
    mock.assert_async().await;
    assert_eq!(listing.total_pages(), 4);
    assert_eq!(listing.entries().len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_server_error_keeps_previous_listing() -> Result<(), ArchiveError> {
    let (mut server, archive) = common::archive_server().await;
    let ok = server
        .mock("GET", "/api/entries")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(test::paginated_entries_json(&["E1"], 2))
        .create_async()
        .await;
    let _failing = server
        .mock("GET", "/api/entries")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(500)
        .with_body(r#"{"message":"Database unavailable"}"#)
        .create_async()
        .await;

    let mut query = QueryController::from_location("/explore".parse::<Location>()?);
    let mut listing = ListingView::new();
    listing.refresh(&archive, query.list_opts()).await;
    ok.assert_async().await;

    query.next_page(listing.total_pages());
    assert_eq!(
        listing.refresh(&archive, query.list_opts()).await,
        Reconciled::Failed
    );
    assert_eq!(listing.last_error(), Some("Database unavailable"));
    match listing.display() {
        ListingDisplay::Entries(entries) => assert_eq!(entries[0].id, "E1"),
        other => panic!("unexpected display {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_detail_over_http() -> Result<(), ArchiveError> {
    let (mut server, archive) = common::archive_server().await;
    let mut entry = test::entry_fixture("E1", "konark");
    entry.likes = Some(vec!["U1".to_string(), "U2".to_string()]);
    entry.comments = Some(vec![test::comment("C1", "Stunning")]);

    let _found = server
        .mock("GET", "/api/entries/slug/konark")
        .with_status(200)
        .with_body(common::entry_json(&entry))
        .create_async()
        .await;
    let _missing = server
        .mock("GET", "/api/entries/slug/atlantis")
        .with_status(404)
        .with_body(r#"{"message":"Entry not found"}"#)
        .create_async()
        .await;

    let session = test::user_session("U2");
    let mut view = DetailView::new();
    view.load(&archive, "konark", Some(&session)).await;
    let interaction = view.interaction().unwrap();
    assert!(interaction.liked());
    assert_eq!(interaction.like_count(), 2);
    assert_eq!(interaction.comments()[0].text, "Stunning");

    view.load(&archive, "atlantis", Some(&session)).await;
    assert_eq!(view.phase(), &DetailPhase::NotFound);
    Ok(())
}

#[tokio::test]
async fn test_like_and_comment_over_http() -> Result<(), ArchiveError> {
    let (mut server, archive) = common::archive_server().await;
    let session = test::user_session("U1");
    let ctx = common::logged_in(&mut server, &archive, &session).await;

    let entry = test::entry_fixture("E1", "konark");
    let _detail = server
        .mock("GET", "/api/entries/slug/konark")
        .with_status(200)
        .with_body(common::entry_json(&entry))
        .create_async()
        .await;
    let like = server
        .mock("POST", "/api/entries/E1/like")
        .match_header("authorization", "Bearer tok-U1")
        .with_status(200)
        .with_body(r#"{"isLiked": true, "likes": 7}"#)
        .create_async()
        .await;
    let comment = server
        .mock("POST", "/api/entries/E1/comment")
        .match_header("authorization", "Bearer tok-U1")
        .match_body(Matcher::PartialJson(serde_json::json!({"text": "Lovely"})))
        .with_status(201)
        .with_body(
            r#"{"comments": [
                {"_id": "C1", "userName": "Meera", "text": "First"},
                {"_id": "C2", "userName": "Asha", "text": "Lovely"}
            ]}"#,
        )
        .create_async()
        .await;

    let mut view = DetailView::new();
    view.load(&archive, "konark", ctx.current_session()).await;
    let interaction = view.interaction_mut().unwrap();

    interaction.toggle_like(&ctx, &archive).await?;
    like.assert_async().await;
    assert!(interaction.liked());
    assert_eq!(interaction.like_count(), 7);

    interaction.set_comment_input(" Lovely ");
    interaction.submit_comment(&ctx, &archive).await?;
    comment.assert_async().await;
    assert_eq!(interaction.comments().len(), 2);
    assert_eq!(interaction.comment_input(), "");
    Ok(())
}
