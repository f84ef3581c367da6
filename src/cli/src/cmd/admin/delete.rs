use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};
use colored::Colorize;
use dialoguer::Confirm;

use libarchive::error::ArchiveError;

use crate::cmd::admin::open_panel;
use crate::cmd::RunCmd;

pub const NAME: &str = "delete";
pub struct AdminDeleteCmd;

#[async_trait]
impl RunCmd for AdminDeleteCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Delete an entry")
            .arg(Arg::new("id").required(true).help("Id of the entry"))
            .arg(
                Arg::new("yes")
                    .long("yes")
                    .short('y')
                    .help("Skip the confirmation")
                    .action(clap::ArgAction::SetTrue),
            )
    }

    async fn run(&self, args: &ArgMatches) -> Result<(), ArchiveError> {
        let id = args
            .get_one::<String>("id")
            .ok_or_else(|| ArchiveError::basic_str("Must supply an id"))?;

        if !args.get_flag("yes") {
            let confirmed = Confirm::new()
                .with_prompt("Are you sure you want to delete this entry?")
                .interact()
                .map_err(|e| ArchiveError::basic_str(format!("Error confirming deletion: {e}")))?;
            if !confirmed {
                return Ok(());
            }
        }

        let (ctx, mut panel) = open_panel().await?;
        let message = panel
            .delete(&ctx.session, &ctx.archive, id)
            .await
            .map_err(|err| {
                log::error!("Error deleting entry {id}: {err}");
                ArchiveError::server_error(format!("Error deleting entry: {}", err.user_message()))
            })?;
        println!("{}", message.green());
        Ok(())
    }
}
