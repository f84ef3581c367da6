use std::collections::HashMap;
use std::process::ExitCode;

use clap::Command;
use colored::Colorize;

use libarchive::util::logging;

pub mod cmd;
pub mod helpers;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging();

    let cmds: Vec<Box<dyn cmd::RunCmd>> = vec![
        Box::new(cmd::AdminCmd),
        Box::new(cmd::CommentCmd),
        Box::new(cmd::ConfigCmd),
        Box::new(cmd::ExploreCmd),
        Box::new(cmd::HomeCmd),
        Box::new(cmd::LikeCmd),
        Box::new(cmd::LoginCmd),
        Box::new(cmd::LogoutCmd),
        Box::new(cmd::RegisterCmd),
        Box::new(cmd::ShareCmd),
        Box::new(cmd::ShowCmd),
        Box::new(cmd::SitemapCmd),
        Box::new(cmd::WhoamiCmd),
    ];

    let mut command = Command::new("archive")
        .version(libarchive::constants::ARCHIVE_VERSION)
        .about("Browse and curate BharatArchive, an archive of Indian cultural heritage")
        .subcommand_required(true)
        .arg_required_else_help(true);

    let mut runners: HashMap<String, Box<dyn cmd::RunCmd>> = HashMap::new();
    for cmd in cmds {
        command = command.subcommand(cmd.args());
        runners.insert(cmd.name().to_string(), cmd);
    }

    let matches = command.get_matches();
    match matches.subcommand() {
        Some((command, args)) => {
            if let Some(runner) = runners.get(command) {
                if let Err(err) = runner.run(args).await {
                    eprintln!("{}", err.user_message().red());
                    return ExitCode::FAILURE;
                }
            } else {
                eprintln!("Unknown command `archive {command}`");
                return ExitCode::FAILURE;
            }
        }
        None => unreachable!(), // subcommand_required
    }

    ExitCode::SUCCESS
}
