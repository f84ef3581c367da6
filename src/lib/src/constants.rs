//! Constants used throughout the BharatArchive client
//!

/// Current version of the client, reported in the user agent
pub const ARCHIVE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name used for the config directory and the user agent
pub const ARCHIVE: &str = "bharat-archive";
/// Config lives in $HOME/.config/bharat-archive
pub const CONFIG_DIR: &str = ".config";

/// Env var that overrides the API base url
pub const API_URL_ENV: &str = "ARCHIVE_API_URL";
/// Env var that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "ARCHIVE_CONFIG_DIR";

/// Used when neither the environment nor the config file provide a base url
pub const DEFAULT_API_URL: &str = "https://bharatarchive-backend.onrender.com/api";
/// Public origin of the site, used for permalinks and the sitemap
pub const DEFAULT_SITE_URL: &str = "http://localhost:5173";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Pagination
pub const DEFAULT_PAGE_NUM: usize = 1;
/// Fixed page size of the explore listing
pub const PAGE_SIZE: usize = 12;
/// Number of entries shown on the home page
pub const FEATURED_LIMIT: usize = 8;
/// Sort order of the home page listing, most viewed first
pub const FEATURED_SORT: &str = "-views";
/// The admin table loads everything in one go
pub const ADMIN_LIST_LIMIT: usize = 100;

// Routes
pub const HOME_PATH: &str = "/";
pub const EXPLORE_PATH: &str = "/explore";
pub const LOGIN_PATH: &str = "/login";
pub const ENTRY_PATH_PREFIX: &str = "/entry";

// Query string keys of the explore location
pub const SEARCH_PARAM: &str = "search";
pub const CATEGORY_PARAM: &str = "category";
pub const PAGE_PARAM: &str = "page";

/// Sentinel category value meaning "no filter"
pub const ALL_CATEGORIES: &str = "all";

// SEO
pub const SITE_NAME: &str = "BharatArchive";
pub const SITE_TAGLINE: &str = "Indian Cultural Heritage";
pub const META_DESCRIPTION_LEN: usize = 160;
pub const SHARE_TEXT_LEN: usize = 100;
pub const CARD_EXCERPT_LEN: usize = 150;
