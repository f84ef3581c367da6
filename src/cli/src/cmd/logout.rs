use async_trait::async_trait;
use clap::Command;

use libarchive::error::ArchiveError;

use crate::cmd::RunCmd;
use crate::helpers::Context;

pub const NAME: &str = "logout";
pub struct LogoutCmd;

#[async_trait]
impl RunCmd for LogoutCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME).about("Forget the stored session token")
    }

    async fn run(&self, _args: &clap::ArgMatches) -> Result<(), ArchiveError> {
        let mut ctx = Context::load().await?;
        ctx.session.logout()?;
        println!("Logged out");
        Ok(())
    }
}
