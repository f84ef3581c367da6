use async_trait::async_trait;
use clap::Command;

use libarchive::error::ArchiveError;

use crate::cmd::RunCmd;
use crate::helpers::Context;

pub const NAME: &str = "whoami";
pub struct WhoamiCmd;

#[async_trait]
impl RunCmd for WhoamiCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME).about("Show the logged in user")
    }

    async fn run(&self, _args: &clap::ArgMatches) -> Result<(), ArchiveError> {
        let ctx = Context::load().await?;
        match ctx.session.current_session() {
            Some(session) => {
                let email = session.user.email.as_deref().unwrap_or("");
                let role = if session.is_admin() { " (admin)" } else { "" };
                println!("{} <{email}>{role}", session.user.name);
            }
            None => println!("Not logged in"),
        }
        println!("api: {}", ctx.archive.base_url());
        Ok(())
    }
}
