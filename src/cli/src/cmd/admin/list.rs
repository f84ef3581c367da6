use async_trait::async_trait;
use clap::{ArgMatches, Command};

use libarchive::error::ArchiveError;

use crate::cmd::admin::open_panel;
use crate::cmd::RunCmd;
use crate::helpers;

pub const NAME: &str = "list";
pub struct AdminListCmd;

#[async_trait]
impl RunCmd for AdminListCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME).about("List up to 100 entries with their ids")
    }

    async fn run(&self, _args: &ArgMatches) -> Result<(), ArchiveError> {
        let (_ctx, panel) = open_panel().await?;
        if let Some(err) = panel.listing().last_error() {
            return Err(ArchiveError::basic_str(err));
        }
        helpers::print_listing(panel.listing().display());
        for entry in panel.entries() {
            println!("{}  {}", entry.id, entry.slug);
        }
        Ok(())
    }
}
