use async_trait::async_trait;
use clap;
use libarchive::error::ArchiveError;

pub mod admin;
pub use admin::AdminCmd;

pub mod comment;
pub use comment::CommentCmd;

pub mod config;
pub use config::ConfigCmd;

pub mod explore;
pub use explore::ExploreCmd;

pub mod home;
pub use home::HomeCmd;

pub mod like;
pub use like::LikeCmd;

pub mod login;
pub use login::LoginCmd;

pub mod logout;
pub use logout::LogoutCmd;

pub mod register;
pub use register::RegisterCmd;

pub mod share;
pub use share::ShareCmd;

pub mod show;
pub use show::ShowCmd;

pub mod sitemap;
pub use sitemap::SitemapCmd;

pub mod whoami;
pub use whoami::WhoamiCmd;

#[async_trait]
pub trait RunCmd: Send + Sync {
    fn name(&self) -> &str;
    fn args(&self) -> clap::Command;
    async fn run(&self, args: &clap::ArgMatches) -> Result<(), ArchiveError>;
}
