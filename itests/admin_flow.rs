use mockito::Matcher;

use libarchive::core::admin::{ENTRY_CREATED, ENTRY_DELETED};
use libarchive::core::{AdminPanel, EntryForm};
use libarchive::error::ArchiveError;
use libarchive::model::Category;
use libarchive::test;

use crate::common;

fn admin_listing(server: &mut mockito::ServerGuard, ids: &[&str]) -> mockito::Mock {
    server
        .mock("GET", "/api/entries")
        .match_query(Matcher::UrlEncoded("limit".into(), "100".into()))
        .with_status(200)
        .with_body(test::paginated_entries_json(ids, 1))
}

#[tokio::test]
async fn test_create_entry_then_refresh() -> Result<(), ArchiveError> {
    let (mut server, archive) = common::archive_server().await;
    let ctx = common::logged_in(&mut server, &archive, &test::admin_session()).await;

    let create = server
        .mock("POST", "/api/entries")
        .match_header("authorization", "Bearer tok-admin")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "title": "Rath Yatra",
            "category": "festival",
            "imageUrls": ["https://img.example/rath.jpg"],
            "keywords": ["puri", "chariot"],
        })))
        .with_status(201)
        .with_body(common::entry_json(&test::entry_fixture("N1", "rath-yatra")))
        .create_async()
        .await;
    let refresh = admin_listing(&mut server, &["N1"]).create_async().await;

    let mut panel = AdminPanel::new();
    *panel.form_mut() = EntryForm {
        title: "Rath Yatra".to_string(),
        category: Category::Festival,
        image_urls: vec!["https://img.example/rath.jpg".to_string(), "".to_string()],
        content: "Chariot festival of Puri.".to_string(),
        location: "Puri, Odisha".to_string(),
        meta_description: "".to_string(),
        keywords: "puri, chariot".to_string(),
    };

    assert_eq!(panel.submit(&ctx, &archive).await?, ENTRY_CREATED);
    create.assert_async().await;
    refresh.assert_async().await;
    assert_eq!(panel.entries()[0].id, "N1");
    Ok(())
}

#[tokio::test]
async fn test_duplicate_title_message_surfaced() -> Result<(), ArchiveError> {
    let (mut server, archive) = common::archive_server().await;
    let ctx = common::logged_in(&mut server, &archive, &test::admin_session()).await;

    let _create = server
        .mock("POST", "/api/entries")
        .with_status(400)
        .with_body(r#"{"message":"An entry with this title already exists"}"#)
        .create_async()
        .await;

    let mut panel = AdminPanel::new();
    panel.form_mut().title = "Konark".to_string();
    panel.form_mut().image_urls = vec!["k.jpg".to_string()];
    panel.form_mut().content = "Stone chariot".to_string();
    panel.form_mut().location = "Odisha".to_string();

    let err = panel.submit(&ctx, &archive).await.unwrap_err();
    assert_eq!(err.user_message(), "An entry with this title already exists");
    assert_eq!(panel.form().title, "Konark");
    Ok(())
}

#[tokio::test]
async fn test_delete_entry_then_refresh() -> Result<(), ArchiveError> {
    let (mut server, archive) = common::archive_server().await;
    let ctx = common::logged_in(&mut server, &archive, &test::admin_session()).await;

    let delete = server
        .mock("DELETE", "/api/entries/E1")
        .match_header("authorization", "Bearer tok-admin")
        .with_status(200)
        .with_body(r#"{"message":"Entry deleted"}"#)
        .create_async()
        .await;
    let refresh = admin_listing(&mut server, &["E2"]).create_async().await;

    let mut panel = AdminPanel::new();
    assert_eq!(panel.delete(&ctx, &archive, "E1").await?, ENTRY_DELETED);
    delete.assert_async().await;
    refresh.assert_async().await;
    assert_eq!(panel.entries().len(), 1);
    Ok(())
}
