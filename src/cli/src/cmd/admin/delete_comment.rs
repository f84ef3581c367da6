use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};

use libarchive::error::ArchiveError;

use crate::cmd::admin::open_panel;
use crate::cmd::RunCmd;

pub const NAME: &str = "delete-comment";
pub struct AdminDeleteCommentCmd;

#[async_trait]
impl RunCmd for AdminDeleteCommentCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Remove a comment from an entry")
            .arg(Arg::new("id").required(true).help("Id of the entry"))
            .arg(Arg::new("comment").required(true).help("Id of the comment"))
    }

    async fn run(&self, args: &ArgMatches) -> Result<(), ArchiveError> {
        let id = args
            .get_one::<String>("id")
            .ok_or_else(|| ArchiveError::basic_str("Must supply an id"))?;
        let comment = args
            .get_one::<String>("comment")
            .ok_or_else(|| ArchiveError::basic_str("Must supply a comment id"))?;

        let (ctx, mut panel) = open_panel().await?;
        panel
            .delete_comment(&ctx.session, &ctx.archive, id, comment)
            .await?;
        println!("Comment deleted");
        Ok(())
    }
}
