use async_trait::async_trait;
use clap::{ArgMatches, Command};
use colored::Colorize;

use libarchive::error::ArchiveError;

use crate::cmd::admin::{apply_form_args, form_args, open_panel};
use crate::cmd::RunCmd;

pub const NAME: &str = "create";
pub struct AdminCreateCmd;

#[async_trait]
impl RunCmd for AdminCreateCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        form_args(Command::new(NAME).about("Create a new entry"), true)
    }

    async fn run(&self, args: &ArgMatches) -> Result<(), ArchiveError> {
        let (ctx, mut panel) = open_panel().await?;
        panel.toggle_form();
        apply_form_args(panel.form_mut(), args)?;

        let message = panel.submit(&ctx.session, &ctx.archive).await?;
        println!("{}", message.green());
        Ok(())
    }
}
