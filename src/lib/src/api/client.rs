//! # API Client - For interacting with the archive's REST API
//!
//! Every call builds a client that carries the caller's bearer token (when
//! there is a session) and funnels the response through [`parse_json_body`],
//! which is the one place HTTP statuses become [`ArchiveError`] variants.
//!

use crate::constants;
use crate::error::{ArchiveError, SOMETHING_WENT_WRONG};
use crate::model::Session;
use crate::view::ErrorMessage;
pub use reqwest::Url;
use reqwest::{header, Client, ClientBuilder, IntoUrl, StatusCode};
use std::time;

pub mod auth;
pub mod entries;
pub mod sitemap;

const VERSION: &str = constants::ARCHIVE_VERSION;
const USER_AGENT: &str = "BharatArchive";

pub fn get_scheme_and_host_from_url<U: IntoUrl>(url: U) -> Result<(String, String), ArchiveError> {
    let parsed_url = url.into_url()?;
    let mut host_str = parsed_url.host_str().unwrap_or_default().to_string();
    if let Some(port) = parsed_url.port() {
        host_str = format!("{host_str}:{port}");
    }
    Ok((parsed_url.scheme().to_owned(), host_str))
}

/// Host (with port) of an API url, used as the key for stored tokens
pub fn get_host_from_url<U: IntoUrl>(url: U) -> Result<String, ArchiveError> {
    let (_scheme, host) = get_scheme_and_host_from_url(url)?;
    Ok(host)
}

/// Client for anonymous requests
pub fn new() -> Result<Client, ArchiveError> {
    match builder()
        .timeout(time::Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => Ok(client),
        Err(reqwest_err) => Err(ArchiveError::NetworkFailure(reqwest_err)),
    }
}

pub fn new_with_bearer_token(bearer_token: &str) -> Result<Client, ArchiveError> {
    match builder_with_bearer_token(bearer_token)?
        .timeout(time::Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => Ok(client),
        Err(reqwest_err) => Err(ArchiveError::NetworkFailure(reqwest_err)),
    }
}

/// Client that authenticates as the session's user
pub fn new_for_session(session: &Session) -> Result<Client, ArchiveError> {
    new_with_bearer_token(&session.token)
}

fn builder() -> ClientBuilder {
    Client::builder().user_agent(build_user_agent())
}

fn builder_with_bearer_token(bearer_token: &str) -> Result<ClientBuilder, ArchiveError> {
    let auth_header = format!("Bearer {bearer_token}");
    let mut auth_value = match header::HeaderValue::from_str(auth_header.as_str()) {
        Ok(header) => header,
        Err(err) => {
            log::debug!("api::client invalid header value: {}", err);
            return Err(ArchiveError::authentication(
                "Error setting request auth. Please log in again.",
            ));
        }
    };
    auth_value.set_sensitive(true);
    let mut headers = header::HeaderMap::new();
    headers.insert(header::AUTHORIZATION, auth_value);
    Ok(builder().default_headers(headers))
}

fn build_user_agent() -> String {
    format!("{USER_AGENT}/{VERSION} ({})", std::env::consts::OS)
}

/// Checks the status and returns the body of a successful response
pub async fn parse_json_body(url: &str, res: reqwest::Response) -> Result<String, ArchiveError> {
    let status = res.status();
    let body = res.text().await?;

    log::debug!("url: {url}\nstatus: {status}\nbody: {body}");

    if status.is_success() {
        Ok(body)
    } else {
        Err(error_from_status(url, status, &body))
    }
}

/// For endpoints that answer with 204 or a body we do not need
pub async fn parse_empty_body(url: &str, res: reqwest::Response) -> Result<(), ArchiveError> {
    parse_json_body(url, res).await.map(|_| ())
}

/// Maps a non-2xx response onto the error taxonomy. The server's `message`
/// is kept verbatim since the UI shows it to the user as is.
pub fn error_from_status(url: &str, status: StatusCode, body: &str) -> ArchiveError {
    let server_msg = serde_json::from_str::<ErrorMessage>(body)
        .ok()
        .and_then(|msg| msg.message_or_error());
    log::debug!("Err status [{status}] from url {url} [{server_msg:?}]");

    match status {
        StatusCode::NOT_FOUND => ArchiveError::not_found(
            server_msg.unwrap_or_else(|| format!("Resource not found: {url}")),
        ),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ArchiveError::authentication(
            server_msg.unwrap_or_else(|| String::from("You are not authorized to do that.")),
        ),
        _ => ArchiveError::server_error(
            server_msg.unwrap_or_else(|| String::from(SOMETHING_WENT_WRONG)),
        ),
    }
}
