use async_trait::async_trait;
use clap::{Arg, Command};
use colored::Colorize;

use libarchive::core::ShareOutcome;
use libarchive::error::ArchiveError;

use crate::cmd::RunCmd;
use crate::helpers::{Context, TerminalShareTarget};

pub const NAME: &str = "share";
pub struct ShareCmd;

#[async_trait]
impl RunCmd for ShareCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Print the permalink of an entry")
            .arg(Arg::new("slug").required(true).help("Slug of the entry"))
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), ArchiveError> {
        let slug = args
            .get_one::<String>("slug")
            .ok_or_else(|| ArchiveError::basic_str("Must supply a slug"))?;
        let ctx = Context::load().await?;
        let view = ctx.detail(slug).await?;
        let interaction = view
            .interaction()
            .ok_or_else(|| ArchiveError::entry_not_found(slug))?;

        match interaction.share(&TerminalShareTarget, &ctx.site_url) {
            ShareOutcome::LinkCopied(_) => eprintln!("{}", "Link copied".green()),
            ShareOutcome::Shared => {}
            ShareOutcome::Failed => eprintln!("{}", "Could not share this entry".yellow()),
        }
        Ok(())
    }
}
