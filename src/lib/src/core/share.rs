//! Sharing an entry: native share sheet when available, permalink copy otherwise

use crate::constants::SHARE_TEXT_LEN;
use crate::error::ArchiveError;
use crate::model::Entry;
use crate::util;

/// What gets handed to the share target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareData {
    pub fn for_entry(entry: &Entry, site_url: &str) -> ShareData {
        let text = match &entry.meta_description {
            Some(desc) if !desc.trim().is_empty() => desc.to_owned(),
            _ => util::str::truncate_chars(&entry.content, SHARE_TEXT_LEN),
        };
        ShareData {
            title: entry.title.to_owned(),
            text,
            url: entry.permalink(site_url),
        }
    }
}

/// Platform hook for sharing. The CLI implementation prints the link.
pub trait ShareTarget {
    /// Whether a native share facility exists
    fn can_share(&self) -> bool;

    fn share(&self, data: &ShareData) -> Result<(), ArchiveError>;

    fn copy_to_clipboard(&self, text: &str) -> Result<(), ArchiveError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// The permalink was copied; the view shows a "Link copied" notice
    LinkCopied(String),
    Failed,
}

pub fn share<T: ShareTarget + ?Sized>(target: &T, data: &ShareData) -> ShareOutcome {
    if target.can_share() {
        return match target.share(data) {
            Ok(()) => ShareOutcome::Shared,
            Err(err) => {
                log::error!("Error sharing {}: {err}", data.url);
                ShareOutcome::Failed
            }
        };
    }

    match target.copy_to_clipboard(&data.url) {
        Ok(()) => ShareOutcome::LinkCopied(data.url.to_owned()),
        Err(err) => {
            log::error!("Error copying {}: {err}", data.url);
            ShareOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{self, RecordingShareTarget};

    #[test]
    fn test_share_data_prefers_meta_description() {
        let mut entry = test::entry_fixture("E1", "konark");
        entry.meta_description = Some("Sun temple".to_string());
        let data = ShareData::for_entry(&entry, "https://bharat.example");
        assert_eq!(data.text, "Sun temple");
        assert_eq!(data.url, "https://bharat.example/entry/konark");

        entry.meta_description = None;
        entry.content = "y".repeat(300);
        let data = ShareData::for_entry(&entry, "https://bharat.example");
        assert_eq!(data.text.chars().count(), SHARE_TEXT_LEN);
    }

    #[test]
    fn test_native_share_used_when_available() {
        let target = RecordingShareTarget::with_native_share();
        let data = ShareData::for_entry(&test::entry_fixture("E1", "konark"), "http://site");
        assert_eq!(share(&target, &data), ShareOutcome::Shared);
        assert_eq!(target.shared().len(), 1);
        assert!(target.copied().is_empty());
    }

    #[test]
    fn test_share_failure_is_swallowed() {
        let target = RecordingShareTarget::failing();
        let data = ShareData::for_entry(&test::entry_fixture("E1", "konark"), "http://site");
        assert_eq!(share(&target, &data), ShareOutcome::Failed);
    }
}
