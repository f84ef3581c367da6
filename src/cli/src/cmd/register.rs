use async_trait::async_trait;
use clap::{Arg, Command};
use colored::Colorize;

use libarchive::error::ArchiveError;
use libarchive::view::Registration;

use crate::cmd::login::{prompt_input, prompt_password};
use crate::cmd::RunCmd;
use crate::helpers::Context;

pub const NAME: &str = "register";
pub struct RegisterCmd;

#[async_trait]
impl RunCmd for RegisterCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Create an account and log in")
            .arg(
                Arg::new("name")
                    .long("name")
                    .short('n')
                    .help("Display name shown on your comments")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("email")
                    .long("email")
                    .short('e')
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("password")
                    .long("password")
                    .short('p')
                    .action(clap::ArgAction::Set),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), ArchiveError> {
        let name = match args.get_one::<String>("name") {
            Some(name) => name.to_owned(),
            None => prompt_input("Name")?,
        };
        let email = match args.get_one::<String>("email") {
            Some(email) => email.to_owned(),
            None => prompt_input("Email")?,
        };
        let password = match args.get_one::<String>("password") {
            Some(password) => password.to_owned(),
            None => prompt_password()?,
        };

        let mut ctx = Context::load().await?;
        let registration = Registration {
            name,
            email,
            password,
        };
        let session = ctx.session.register(&ctx.archive, &registration).await?;
        println!("{} {}", "Welcome,".green(), session.user.name.bold());
        Ok(())
    }
}
