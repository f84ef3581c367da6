//! Configuration for the archive client: where the API lives and which bearer
//! tokens we hold for it
//!

pub mod auth_config;
pub mod client_config;

pub use crate::config::auth_config::AuthConfig;
pub use crate::config::auth_config::AUTH_CONFIG_FILENAME;

pub use crate::config::client_config::ClientConfig;
pub use crate::config::client_config::CLIENT_CONFIG_FILENAME;
