use async_trait::async_trait;
use clap::{Arg, Command};

use libarchive::config::ClientConfig;
use libarchive::error::ArchiveError;

use crate::cmd::RunCmd;
pub const NAME: &str = "config";
pub struct ConfigCmd;

#[async_trait]
impl RunCmd for ConfigCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Sets where the archive lives in ~/.config/bharat-archive/client_config.toml")
            .arg(
                Arg::new("api-url")
                    .long("api-url")
                    .help("Base url of the archive API, e.g. https://host/api. Pass an empty value to reset.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("site-url")
                    .long("site-url")
                    .help("Public site origin used in permalinks and the sitemap.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("show")
                    .long("show")
                    .help("Print the resolved configuration")
                    .action(clap::ArgAction::SetTrue),
            )
            .arg_required_else_help(true)
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), ArchiveError> {
        let mut config = ClientConfig::get()?;
        let mut changed = false;

        if let Some(url) = args.get_one::<String>("api-url") {
            config.api_url = if url.trim().is_empty() {
                None
            } else {
                Some(url::Url::parse(url.trim())?.to_string())
            };
            changed = true;
        }

        if let Some(url) = args.get_one::<String>("site-url") {
            config.site_url = Some(url.to_owned()).filter(|u| !u.trim().is_empty());
            changed = true;
        }

        if changed {
            config.save_default()?;
            println!("Saved config to {}", ClientConfig::default_path()?.display());
        }

        if args.get_flag("show") || changed {
            println!("api url:  {}", config.resolve_api_url());
            println!("site url: {}", config.resolve_site_url());
        }
        Ok(())
    }
}
