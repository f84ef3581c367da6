//! Errors for the archive client
//!
//! Enumeration for all errors that can occur while talking to the archive
//!

use derive_more::{Display, Error};
use std::fmt::Debug;
use std::io;

pub mod string_error;

pub use crate::error::string_error::StringError;

/// Shown when the server rejects a request without giving a reason
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";

pub const LOGIN_REQUIRED: &str = "You must be logged in to do that.\n\nLog in with:\n\n  archive login --email <EMAIL>\n";

pub const ADMIN_REQUIRED: &str = "Only administrators can manage entries.";

#[derive(Debug, Display, Error)]
pub enum ArchiveError {
    /// The request could not complete (dns, connection, timeout, body decode)
    NetworkFailure(reqwest::Error),
    /// Non-2xx response, carries the server's message verbatim
    ServerError(StringError),
    /// Valid request, no matching resource
    NotFound(StringError),
    /// Client-side field checks before submission
    ValidationFailure(StringError),
    /// 401/403 from the server or a missing session
    Authentication(StringError),

    // External Library Errors
    IO(io::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    URL(url::ParseError),
    JSON(serde_json::Error),
    ENV(std::env::VarError),

    // Fallback
    Basic(StringError),
}

impl ArchiveError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        ArchiveError::Basic(StringError::from(s.as_ref()))
    }

    pub fn server_error(s: impl AsRef<str>) -> Self {
        ArchiveError::ServerError(StringError::from(s.as_ref()))
    }

    pub fn not_found(s: impl AsRef<str>) -> Self {
        ArchiveError::NotFound(StringError::from(s.as_ref()))
    }

    pub fn validation(s: impl AsRef<str>) -> Self {
        ArchiveError::ValidationFailure(StringError::from(s.as_ref()))
    }

    pub fn authentication(s: impl AsRef<str>) -> Self {
        ArchiveError::Authentication(StringError::from(s.as_ref()))
    }

    pub fn login_required() -> Self {
        ArchiveError::authentication(LOGIN_REQUIRED)
    }

    pub fn admin_required() -> Self {
        ArchiveError::authentication(ADMIN_REQUIRED)
    }

    pub fn entry_not_found(slug: impl AsRef<str>) -> Self {
        ArchiveError::not_found(format!("Entry not found: {}", slug.as_ref()))
    }

    pub fn home_dir_not_found() -> Self {
        ArchiveError::basic_str("Home directory not found")
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ArchiveError::NotFound(_))
    }

    pub fn is_network_failure(&self) -> bool {
        matches!(self, ArchiveError::NetworkFailure(_))
    }

    /// The text shown to the user in a blocking notification.
    ///
    /// Server and validation messages are passed through untouched so the user
    /// sees exactly what the API said.
    pub fn user_message(&self) -> String {
        match self {
            ArchiveError::ServerError(msg)
            | ArchiveError::NotFound(msg)
            | ArchiveError::ValidationFailure(msg)
            | ArchiveError::Authentication(msg)
            | ArchiveError::Basic(msg) => msg.to_string(),
            ArchiveError::NetworkFailure(err) => format!("Could not reach the archive: {err}"),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ArchiveError {
    fn from(error: reqwest::Error) -> Self {
        ArchiveError::NetworkFailure(error)
    }
}

impl From<io::Error> for ArchiveError {
    fn from(error: io::Error) -> Self {
        ArchiveError::IO(error)
    }
}

impl From<String> for ArchiveError {
    fn from(error: String) -> Self {
        ArchiveError::Basic(StringError::from(error))
    }
}

impl From<toml::ser::Error> for ArchiveError {
    fn from(error: toml::ser::Error) -> Self {
        ArchiveError::TomlSer(error)
    }
}

impl From<toml::de::Error> for ArchiveError {
    fn from(error: toml::de::Error) -> Self {
        ArchiveError::TomlDe(error)
    }
}

impl From<url::ParseError> for ArchiveError {
    fn from(error: url::ParseError) -> Self {
        ArchiveError::URL(error)
    }
}

impl From<serde_json::Error> for ArchiveError {
    fn from(error: serde_json::Error) -> Self {
        ArchiveError::JSON(error)
    }
}

impl From<std::env::VarError> for ArchiveError {
    fn from(error: std::env::VarError) -> Self {
        ArchiveError::ENV(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_passes_server_text_through() {
        let err = ArchiveError::server_error("Slug already exists");
        assert_eq!(err.user_message(), "Slug already exists");
        assert_eq!(err.to_string(), "Slug already exists");
    }

    #[test]
    fn test_not_found_predicate() {
        assert!(ArchiveError::entry_not_found("hampi-temple").is_not_found());
        assert!(!ArchiveError::validation("Title is required").is_not_found());
    }
}
