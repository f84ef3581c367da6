use async_trait::async_trait;
use clap::{Arg, Command};
use colored::Colorize;

use libarchive::core::Outcome;
use libarchive::error::ArchiveError;

use crate::cmd::RunCmd;
use crate::helpers::Context;

pub const NAME: &str = "like";
pub struct LikeCmd;

#[async_trait]
impl RunCmd for LikeCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Like an entry, or take the like back")
            .arg(Arg::new("slug").required(true).help("Slug of the entry"))
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), ArchiveError> {
        let slug = args
            .get_one::<String>("slug")
            .ok_or_else(|| ArchiveError::basic_str("Must supply a slug"))?;
        let ctx = Context::load().await?;
        let mut view = ctx.detail(slug).await?;
        let interaction = view
            .interaction_mut()
            .ok_or_else(|| ArchiveError::entry_not_found(slug))?;

        match interaction.toggle_like(&ctx.session, &ctx.archive).await? {
            Outcome::LoginRequired => Err(ArchiveError::login_required()),
            _ => {
                let state = if interaction.liked() {
                    "Liked".red()
                } else {
                    "Unliked".normal()
                };
                println!("{state} {} ({} likes)", interaction.entry().title, interaction.like_count());
                Ok(())
            }
        }
    }
}
