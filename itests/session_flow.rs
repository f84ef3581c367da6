use libarchive::config::AUTH_CONFIG_FILENAME;
use libarchive::core::{AuthConfigTokenStore, SessionContext, TokenStore};
use libarchive::error::ArchiveError;
use libarchive::test;

use crate::common;

#[tokio::test]
async fn test_login_then_restore_from_config_file() -> Result<(), ArchiveError> {
    let (mut server, archive) = common::archive_server().await;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(AUTH_CONFIG_FILENAME);
    let session = test::admin_session();

    let _login = server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_body(common::auth_json(&session))
        .create_async()
        .await;
    let profile = server
        .mock("GET", "/api/auth/profile")
        .match_header("authorization", "Bearer tok-admin")
        .with_status(200)
        .with_body(r#"{"user": {"id": "A1", "name": "Admin", "role": "admin"}}"#)
        .create_async()
        .await;

    let store = AuthConfigTokenStore::new(&path, archive.host()?);
    let mut ctx = SessionContext::new(Box::new(store));
    ctx.login(&archive, &test::credentials()).await?;
    assert!(ctx.is_admin());

    // Next run picks the token up from disk
    let store = AuthConfigTokenStore::new(&path, archive.host()?);
    let mut ctx = SessionContext::new(Box::new(store));
    let restored = ctx.restore(&archive).await?;
    profile.assert_async().await;
    assert_eq!(restored.map(|s| s.user.name.as_str()), Some("Admin"));
    Ok(())
}

#[tokio::test]
async fn test_expired_token_is_cleared() -> Result<(), ArchiveError> {
    let (mut server, archive) = common::archive_server().await;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(AUTH_CONFIG_FILENAME);

    let _profile = server
        .mock("GET", "/api/auth/profile")
        .with_status(401)
        .with_body(r#"{"message":"Token is not valid"}"#)
        .create_async()
        .await;

    let store = AuthConfigTokenStore::new(&path, archive.host()?);
    store.save("expired")?;

    let mut ctx = SessionContext::new(Box::new(store));
    assert!(ctx.restore(&archive).await?.is_none());

    let store = AuthConfigTokenStore::new(&path, archive.host()?);
    assert_eq!(store.load()?, None);
    Ok(())
}

#[tokio::test]
async fn test_bad_credentials_surface_server_message() -> Result<(), ArchiveError> {
    let (mut server, archive) = common::archive_server().await;
    let _login = server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_body(r#"{"message":"Invalid credentials"}"#)
        .create_async()
        .await;

    let mut ctx = SessionContext::new(Box::new(test::MemoryTokenStore::new()));
    let err = ctx
        .login(&archive, &test::credentials())
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Invalid credentials");
    assert!(!ctx.is_authenticated());
    Ok(())
}
