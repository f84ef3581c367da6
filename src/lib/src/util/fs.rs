use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{ARCHIVE, CONFIG_DIR, CONFIG_DIR_ENV};
use crate::error::ArchiveError;

/// Directory the config files live in, `$HOME/.config/bharat-archive` unless
/// `ARCHIVE_CONFIG_DIR` points elsewhere.
pub fn archive_config_dir() -> Result<PathBuf, ArchiveError> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    match dirs::home_dir() {
        Some(home) => Ok(home.join(CONFIG_DIR).join(ARCHIVE)),
        None => Err(ArchiveError::home_dir_not_found()),
    }
}

pub fn read_from_path(path: &Path) -> Result<String, ArchiveError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(err) => {
            log::debug!("could not read {:?}: {}", path, err);
            Err(ArchiveError::basic_str(format!(
                "Could not open file {}",
                path.display()
            )))
        }
    }
}

/// Writes `value` to `path`, creating the parent directory when needed
pub fn write_to_path(path: &Path, value: impl AsRef<str>) -> Result<(), ArchiveError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, value.as_ref())?;
    Ok(())
}
