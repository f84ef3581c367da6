use crate::api;
use crate::api::client;
use crate::error::ArchiveError;
use crate::model::User;
use crate::view::{AuthResponse, Credentials, ProfileResponse, Registration};

pub async fn login(base_url: &str, credentials: &Credentials) -> Result<AuthResponse, ArchiveError> {
    let url = api::endpoint::url_from_base(base_url, "/auth/login");
    log::debug!("api::client::auth::login {} as {}", url, credentials.email);

    let client = client::new()?;
    let res = client.post(&url).json(credentials).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: AuthResponse = serde_json::from_str(&body)?;
    Ok(response)
}

pub async fn register(
    base_url: &str,
    registration: &Registration,
) -> Result<AuthResponse, ArchiveError> {
    let url = api::endpoint::url_from_base(base_url, "/auth/register");
    log::debug!("api::client::auth::register {} as {}", url, registration.email);

    let client = client::new()?;
    let res = client.post(&url).json(registration).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: AuthResponse = serde_json::from_str(&body)?;
    Ok(response)
}

/// The user a bearer token belongs to
pub async fn profile(base_url: &str, bearer_token: &str) -> Result<User, ArchiveError> {
    let url = api::endpoint::url_from_base(base_url, "/auth/profile");
    log::debug!("api::client::auth::profile {}", url);

    let client = client::new_with_bearer_token(bearer_token)?;
    let res = client.get(&url).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: ProfileResponse = serde_json::from_str(&body)?;
    Ok(response.into_user())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_returns_token_and_user() -> Result<(), ArchiveError> {
        let mut server = mockito::Server::new_async().await;
        let base_url = format!("{}/api", server.url());

        let mock = server
            .mock("POST", "/api/auth/login")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "email": "asha@example.com",
                "password": "hunter2"
            })))
            .with_status(200)
            .with_body(
                r#"{"token":"tok-1","user":{"id":"U1","name":"Asha","email":"asha@example.com","role":"user"}}"#,
            )
            .create_async()
            .await;

        let credentials = Credentials {
            email: "asha@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let response = login(&base_url, &credentials).await?;
        mock.assert_async().await;
        assert_eq!(response.token, "tok-1");
        assert_eq!(response.user.name, "Asha");
        Ok(())
    }

    #[tokio::test]
    async fn test_login_rejected() -> Result<(), ArchiveError> {
        let mut server = mockito::Server::new_async().await;
        let base_url = format!("{}/api", server.url());

        let _mock = server
            .mock("POST", "/api/auth/login")
            .with_status(401)
            .with_body(r#"{"message":"Invalid credentials"}"#)
            .create_async()
            .await;

        let credentials = Credentials {
            email: "asha@example.com".to_string(),
            password: "wrong".to_string(),
        };
        let err = login(&base_url, &credentials).await.unwrap_err();
        assert!(matches!(err, ArchiveError::Authentication(_)));
        assert_eq!(err.user_message(), "Invalid credentials");
        Ok(())
    }

    #[tokio::test]
    async fn test_profile_accepts_bare_and_wrapped_user() -> Result<(), ArchiveError> {
        let mut server = mockito::Server::new_async().await;
        let base_url = format!("{}/api", server.url());

        let mock = server
            .mock("GET", "/api/auth/profile")
            .match_header("authorization", "Bearer tok-1")
            .with_status(200)
            .with_body(r#"{"user":{"_id":"U1","name":"Asha","role":"admin"}}"#)
            .create_async()
            .await;

        let user = profile(&base_url, "tok-1").await?;
        mock.assert_async().await;
        assert!(user.is_admin());
        Ok(())
    }
}
