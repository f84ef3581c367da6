use async_trait::async_trait;
use clap::{Arg, Command};
use colored::Colorize;
use dialoguer::{Input, Password};

use libarchive::error::ArchiveError;
use libarchive::view::Credentials;

use crate::cmd::RunCmd;
use crate::helpers::Context;

pub const NAME: &str = "login";
pub struct LoginCmd;

#[async_trait]
impl RunCmd for LoginCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Log in and store the session token for this archive")
            .arg(
                Arg::new("email")
                    .long("email")
                    .short('e')
                    .help("Account email, prompted for when missing")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("password")
                    .long("password")
                    .short('p')
                    .help("Account password, prompted for when missing")
                    .action(clap::ArgAction::Set),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), ArchiveError> {
        let email = match args.get_one::<String>("email") {
            Some(email) => email.to_owned(),
            None => prompt_input("Email")?,
        };
        let password = match args.get_one::<String>("password") {
            Some(password) => password.to_owned(),
            None => prompt_password()?,
        };

        let mut ctx = Context::load().await?;
        let session = ctx
            .session
            .login(&ctx.archive, &Credentials { email, password })
            .await?;
        println!("{} {}", "Logged in as".green(), session.user.name.bold());
        Ok(())
    }
}

pub fn prompt_input(prompt: &str) -> Result<String, ArchiveError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| ArchiveError::basic_str(format!("Error reading {prompt}: {e}")))
}

pub fn prompt_password() -> Result<String, ArchiveError> {
    Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| ArchiveError::basic_str(format!("Error reading password: {e}")))
}
