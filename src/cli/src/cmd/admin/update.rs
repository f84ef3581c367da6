use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};
use colored::Colorize;

use libarchive::core::EntrySource;
use libarchive::error::ArchiveError;

use crate::cmd::admin::{apply_form_args, form_args, open_panel};
use crate::cmd::RunCmd;

pub const NAME: &str = "update";
pub struct AdminUpdateCmd;

#[async_trait]
impl RunCmd for AdminUpdateCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        form_args(
            Command::new(NAME)
                .about("Edit an entry, fields not given keep their value")
                .arg(Arg::new("id").required(true).help("Id of the entry")),
            false,
        )
    }

    async fn run(&self, args: &ArgMatches) -> Result<(), ArchiveError> {
        let id = args
            .get_one::<String>("id")
            .ok_or_else(|| ArchiveError::basic_str("Must supply an id"))?;
        let (ctx, mut panel) = open_panel().await?;

        let entry = ctx
            .archive
            .get_entry_by_id(id)
            .await?
            .ok_or_else(|| ArchiveError::entry_not_found(id))?;
        panel.edit(&entry);
        apply_form_args(panel.form_mut(), args)?;

        let message = panel.submit(&ctx.session, &ctx.archive).await?;
        println!("{}", message.green());
        Ok(())
    }
}
