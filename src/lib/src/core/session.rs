//! Session capability: who is logged in, and the token that proves it
//!
//! There is no global session. A [`SessionContext`] is created once by the
//! frontend and handed to every controller that gates an action on
//! authentication.
//!

use std::path::PathBuf;

use crate::config::AuthConfig;
use crate::core::source::AuthSource;
use crate::error::ArchiveError;
use crate::model::Session;
use crate::view::{AuthResponse, Credentials, Registration};

/// Durable storage for the bearer token
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, ArchiveError>;

    fn save(&self, token: &str) -> Result<(), ArchiveError>;

    fn clear(&self) -> Result<(), ArchiveError>;
}

/// Keeps the token in `auth_config.toml`, keyed by API host
pub struct AuthConfigTokenStore {
    path: PathBuf,
    host: String,
}

impl AuthConfigTokenStore {
    pub fn new(path: impl Into<PathBuf>, host: impl Into<String>) -> AuthConfigTokenStore {
        AuthConfigTokenStore {
            path: path.into(),
            host: host.into(),
        }
    }

    /// Store in the default config directory
    pub fn for_host(host: impl Into<String>) -> Result<AuthConfigTokenStore, ArchiveError> {
        Ok(AuthConfigTokenStore::new(AuthConfig::default_path()?, host))
    }
}

impl TokenStore for AuthConfigTokenStore {
    fn load(&self) -> Result<Option<String>, ArchiveError> {
        let config = AuthConfig::load_or_empty(&self.path)?;
        Ok(config.auth_token_for_host(&self.host))
    }

    fn save(&self, token: &str) -> Result<(), ArchiveError> {
        let mut config = AuthConfig::load_or_empty(&self.path)?;
        config.add_host_auth_token(self.host.as_str(), token);
        config.save(&self.path)
    }

    fn clear(&self) -> Result<(), ArchiveError> {
        let mut config = AuthConfig::load_or_empty(&self.path)?;
        if config.remove_host_auth_token(&self.host) {
            config.save(&self.path)?;
        }
        Ok(())
    }
}

pub struct SessionContext {
    store: Box<dyn TokenStore>,
    session: Option<Session>,
}

impl SessionContext {
    pub fn new(store: Box<dyn TokenStore>) -> SessionContext {
        SessionContext {
            store,
            session: None,
        }
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_admin())
    }

    /// The session, or an authentication error telling the user to log in
    pub fn require_session(&self) -> Result<&Session, ArchiveError> {
        self.session.as_ref().ok_or_else(ArchiveError::login_required)
    }

    pub async fn login<A: AuthSource + ?Sized>(
        &mut self,
        auth: &A,
        credentials: &Credentials,
    ) -> Result<&Session, ArchiveError> {
        let response = auth.login(credentials).await?;
        self.start(response)
    }

    pub async fn register<A: AuthSource + ?Sized>(
        &mut self,
        auth: &A,
        registration: &Registration,
    ) -> Result<&Session, ArchiveError> {
        let response = auth.register(registration).await?;
        self.start(response)
    }

    /// Picks up the token a previous run stored. A token the server no longer
    /// accepts is cleared; a network failure is returned and the token kept.
    pub async fn restore<A: AuthSource + ?Sized>(
        &mut self,
        auth: &A,
    ) -> Result<Option<&Session>, ArchiveError> {
        let Some(token) = self.store.load()? else {
            log::debug!("no stored token, starting anonymous");
            return Ok(None);
        };

        match auth.profile(&token).await {
            Ok(user) => {
                log::debug!("restored session for {}", user.name);
                self.session = Some(Session::new(user, token));
                Ok(self.session.as_ref())
            }
            Err(ArchiveError::Authentication(msg)) | Err(ArchiveError::NotFound(msg)) => {
                log::info!("stored token rejected, clearing it: {msg}");
                self.store.clear()?;
                self.session = None;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    pub fn logout(&mut self) -> Result<(), ArchiveError> {
        self.session = None;
        self.store.clear()
    }

    fn start(&mut self, response: AuthResponse) -> Result<&Session, ArchiveError> {
        self.store.save(&response.token)?;
        log::debug!("session started for {}", response.user.name);
        Ok(&*self
            .session
            .insert(Session::new(response.user, response.token)))
    }
}
