use crate::constants::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_SITE_URL};
use crate::error::ArchiveError;
use crate::util;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CLIENT_CONFIG_FILENAME: &str = "client_config.toml";

/// Where the archive lives. Both values are optional in the file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base url of the REST API, e.g. `https://host/api`
    #[serde(default)]
    pub api_url: Option<String>,
    /// Public origin of the site, used for permalinks and the sitemap
    #[serde(default)]
    pub site_url: Option<String>,
}

impl ClientConfig {
    pub fn new(path: &Path) -> Result<ClientConfig, ArchiveError> {
        let contents = util::fs::read_from_path(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn default_path() -> Result<PathBuf, ArchiveError> {
        Ok(util::fs::archive_config_dir()?.join(CLIENT_CONFIG_FILENAME))
    }

    pub fn load_or_default(path: &Path) -> Result<ClientConfig, ArchiveError> {
        log::debug!("looking for client config in...{:?}", path);
        if path.exists() {
            ClientConfig::new(path)
        } else {
            Ok(ClientConfig::default())
        }
    }

    pub fn get() -> Result<ClientConfig, ArchiveError> {
        ClientConfig::load_or_default(&ClientConfig::default_path()?)
    }

    pub fn save_default(&self) -> Result<(), ArchiveError> {
        self.save(&ClientConfig::default_path()?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ArchiveError> {
        log::debug!("Saving client config to {:?}", path);
        let toml = toml::to_string(&self)?;
        util::fs::write_to_path(path, toml)
    }

    /// The API base url: `ARCHIVE_API_URL`, then the config file, then the
    /// hardcoded fallback. Trailing slashes are stripped.
    pub fn resolve_api_url(&self) -> String {
        let from_env = std::env::var(API_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty());
        let url = from_env
            .or_else(|| self.api_url.clone().filter(|url| !url.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        url.trim().trim_end_matches('/').to_string()
    }

    pub fn resolve_site_url(&self) -> String {
        self.site_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string()
    }
}
