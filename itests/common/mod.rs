use libarchive::core::{RemoteArchive, SessionContext};
use libarchive::model::{Entry, Session};
use libarchive::test::{self, MemoryTokenStore};

/// A mock API server and an archive pointed at its `/api` root
pub async fn archive_server() -> (mockito::ServerGuard, RemoteArchive) {
    test::init_test_env();
    let server = mockito::Server::new_async().await;
    let archive = RemoteArchive::new(format!("{}/api", server.url()));
    (server, archive)
}

pub fn entry_json(entry: &Entry) -> String {
    serde_json::to_string(entry).unwrap()
}

pub fn auth_json(session: &Session) -> String {
    serde_json::json!({
        "token": session.token,
        "user": {
            "id": session.user.id,
            "name": session.user.name,
            "email": session.user.email,
            "role": session.user.role,
        }
    })
    .to_string()
}

/// Context logged in through the mock server's `/auth/login`
pub async fn logged_in(
    server: &mut mockito::ServerGuard,
    archive: &RemoteArchive,
    session: &Session,
) -> SessionContext {
    let _mock = server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_body(auth_json(session))
        .create_async()
        .await;
    let mut ctx = SessionContext::new(Box::new(MemoryTokenStore::new()));
    ctx.login(archive, &test::credentials()).await.unwrap();
    ctx
}
