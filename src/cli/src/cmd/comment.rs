use async_trait::async_trait;
use clap::{Arg, Command};

use libarchive::core::Outcome;
use libarchive::error::ArchiveError;

use crate::cmd::RunCmd;
use crate::helpers::Context;

pub const NAME: &str = "comment";
pub struct CommentCmd;

#[async_trait]
impl RunCmd for CommentCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Comment on an entry")
            .arg(Arg::new("slug").required(true).help("Slug of the entry"))
            .arg(
                Arg::new("message")
                    .long("message")
                    .short('m')
                    .required(true)
                    .help("Comment text")
                    .action(clap::ArgAction::Set),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), ArchiveError> {
        let slug = args
            .get_one::<String>("slug")
            .ok_or_else(|| ArchiveError::basic_str("Must supply a slug"))?;
        let message = args
            .get_one::<String>("message")
            .ok_or_else(|| ArchiveError::basic_str("Must supply a message"))?;

        let ctx = Context::load().await?;
        let mut view = ctx.detail(slug).await?;
        let interaction = view
            .interaction_mut()
            .ok_or_else(|| ArchiveError::entry_not_found(slug))?;
        interaction.set_comment_input(message);

        match interaction.submit_comment(&ctx.session, &ctx.archive).await? {
            Outcome::Applied => {
                println!("Comment posted, {} comments", interaction.comments().len());
                Ok(())
            }
            Outcome::LoginRequired => Err(ArchiveError::login_required()),
            Outcome::Ignored => Err(ArchiveError::validation("Comment is empty")),
        }
    }
}
