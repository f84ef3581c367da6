use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};

use libarchive::core::{AdminAccess, AdminPanel, EntryForm};
use libarchive::error::ArchiveError;
use libarchive::model::Category;

use crate::cmd::RunCmd;
use crate::helpers::Context;

pub mod create;
pub mod delete;
pub mod delete_comment;
pub mod list;
pub mod update;

pub const NAME: &str = "admin";

pub struct AdminCmd;

#[async_trait]
impl RunCmd for AdminCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Manage entries, requires an admin account")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(list::AdminListCmd.args())
            .subcommand(create::AdminCreateCmd.args())
            .subcommand(update::AdminUpdateCmd.args())
            .subcommand(delete::AdminDeleteCmd.args())
            .subcommand(delete_comment::AdminDeleteCommentCmd.args())
    }

    async fn run(&self, args: &ArgMatches) -> Result<(), ArchiveError> {
        match args.subcommand() {
            Some((list::NAME, args)) => list::AdminListCmd.run(args).await,
            Some((create::NAME, args)) => create::AdminCreateCmd.run(args).await,
            Some((update::NAME, args)) => update::AdminUpdateCmd.run(args).await,
            Some((delete::NAME, args)) => delete::AdminDeleteCmd.run(args).await,
            Some((delete_comment::NAME, args)) => {
                delete_comment::AdminDeleteCommentCmd.run(args).await
            }
            Some((command, _)) => Err(ArchiveError::basic_str(format!(
                "Unknown command `archive admin {command}`"
            ))),
            None => Ok(()),
        }
    }
}

/// Context plus a loaded admin table, or the reason access is refused
pub async fn open_panel() -> Result<(Context, AdminPanel), ArchiveError> {
    let ctx = Context::load().await?;
    match AdminAccess::check(&ctx.session) {
        AdminAccess::Granted => {}
        AdminAccess::LoginRequired => return Err(ArchiveError::login_required()),
        AdminAccess::Forbidden => return Err(ArchiveError::admin_required()),
    }

    let mut panel = AdminPanel::new();
    panel.refresh(&ctx.archive).await;
    Ok((ctx, panel))
}

/// Flags shared by create and update
pub fn form_args(command: Command, required: bool) -> Command {
    command
        .arg(
            Arg::new("title")
                .long("title")
                .short('t')
                .required(required)
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .short('c')
                .help("temple, ancient-tech, festival, monument, art, tradition or other")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("image")
                .long("image")
                .short('i')
                .required(required)
                .help("Image url, repeat for a gallery")
                .action(clap::ArgAction::Append),
        )
        .arg(
            Arg::new("content")
                .long("content")
                .required(required)
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("location")
                .long("location")
                .short('l')
                .required(required)
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("meta-description")
                .long("meta-description")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("keywords")
                .long("keywords")
                .short('k')
                .help("Comma separated keywords")
                .action(clap::ArgAction::Set),
        )
}

/// Overwrites the form fields given on the command line
pub fn apply_form_args(form: &mut EntryForm, args: &ArgMatches) -> Result<(), ArchiveError> {
    if let Some(title) = args.get_one::<String>("title") {
        form.title = title.to_owned();
    }
    if let Some(category) = args.get_one::<String>("category") {
        form.category = category.parse::<Category>()?;
    }
    if let Some(images) = args.get_many::<String>("image") {
        form.image_urls = images.cloned().collect();
    }
    if let Some(content) = args.get_one::<String>("content") {
        form.content = content.to_owned();
    }
    if let Some(location) = args.get_one::<String>("location") {
        form.location = location.to_owned();
    }
    if let Some(desc) = args.get_one::<String>("meta-description") {
        form.meta_description = desc.to_owned();
    }
    if let Some(keywords) = args.get_one::<String>("keywords") {
        form.keywords = keywords.to_owned();
    }
    Ok(())
}
