use crate::error::ArchiveError;
use crate::util;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

pub const AUTH_CONFIG_FILENAME: &str = "auth_config.toml";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HostConfig {
    pub host: String,
    pub auth_token: Option<String>,
}

impl HostConfig {
    pub fn from_host(host: &str) -> HostConfig {
        HostConfig {
            host: String::from(host),
            auth_token: None,
        }
    }
}

// Hash on the host so we can quickly look up
impl PartialEq for HostConfig {
    fn eq(&self, other: &HostConfig) -> bool {
        self.host == other.host
    }
}
impl Eq for HostConfig {}
impl Hash for HostConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.host.hash(state);
    }
}

/// Bearer tokens persisted between runs, one per API host
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub host_configs: HashSet<HostConfig>,
}

impl AuthConfig {
    pub fn new(path: &Path) -> Result<AuthConfig, ArchiveError> {
        let contents = util::fs::read_from_path(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn new_empty() -> AuthConfig {
        AuthConfig::default()
    }

    pub fn default_path() -> Result<PathBuf, ArchiveError> {
        Ok(util::fs::archive_config_dir()?.join(AUTH_CONFIG_FILENAME))
    }

    /// Loads the config from `path`, an absent file is an empty config
    pub fn load_or_empty(path: &Path) -> Result<AuthConfig, ArchiveError> {
        log::debug!("looking for auth config in...{:?}", path);
        if path.exists() {
            AuthConfig::new(path)
        } else {
            log::debug!("no auth config at {:?}, starting empty", path);
            Ok(AuthConfig::new_empty())
        }
    }

    pub fn get() -> Result<AuthConfig, ArchiveError> {
        AuthConfig::load_or_empty(&AuthConfig::default_path()?)
    }

    pub fn save_default(&self) -> Result<(), ArchiveError> {
        self.save(&AuthConfig::default_path()?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ArchiveError> {
        log::debug!("Saving auth config to {:?}", path);
        let toml = toml::to_string(&self)?;
        util::fs::write_to_path(path, toml)?;
        Ok(())
    }

    pub fn add_host_auth_token<S: AsRef<str>>(&mut self, host: S, token: S) {
        let host = host.as_ref();
        self.host_configs.replace(HostConfig {
            host: String::from(host),
            auth_token: Some(String::from(token.as_ref())),
        });
    }

    pub fn remove_host_auth_token<S: AsRef<str>>(&mut self, host: S) -> bool {
        self.host_configs
            .remove(&HostConfig::from_host(host.as_ref()))
    }

    pub fn auth_token_for_host<S: AsRef<str>>(&self, host: S) -> Option<String> {
        let host = host.as_ref();
        if let Some(token) = self.host_configs.get(&HostConfig::from_host(host)) {
            if token.auth_token.is_none() {
                log::debug!("no auth_token found for host \"{}\"", token.host);
            }
            token.auth_token.clone()
        } else {
            log::debug!("no host configuration found for {}", host);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AuthConfig;
    use crate::error::ArchiveError;

    #[test]
    fn test_second_auth_should_overwrite_first() -> Result<(), ArchiveError> {
        let mut auth_config = AuthConfig::new_empty();

        let host = "bharatarchive-backend.onrender.com";
        auth_config.add_host_auth_token(host, "1234");
        auth_config.add_host_auth_token(host, "5678");

        assert_eq!(auth_config.host_configs.len(), 1);
        assert_eq!(
            auth_config.auth_token_for_host(host),
            Some("5678".to_string())
        );

        Ok(())
    }

    #[test]
    fn test_save_load_and_remove() -> Result<(), ArchiveError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join(super::AUTH_CONFIG_FILENAME);

        let mut auth_config = AuthConfig::load_or_empty(&path)?;
        assert!(auth_config.host_configs.is_empty());

        auth_config.add_host_auth_token("localhost:5000", "tok");
        auth_config.save(&path)?;

        let mut reloaded = AuthConfig::new(&path)?;
        assert_eq!(
            reloaded.auth_token_for_host("localhost:5000"),
            Some("tok".to_string())
        );

        assert!(reloaded.remove_host_auth_token("localhost:5000"));
        assert_eq!(reloaded.auth_token_for_host("localhost:5000"), None);
        Ok(())
    }
}
