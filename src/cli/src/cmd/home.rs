use async_trait::async_trait;
use clap::{Arg, Command};
use colored::Colorize;

use libarchive::core::home::{category_location, FEATURED_CATEGORIES};
use libarchive::core::HomeView;
use libarchive::error::ArchiveError;

use crate::cmd::explore;
use crate::cmd::RunCmd;
use crate::helpers::{self, Context};

pub const NAME: &str = "home";
pub struct HomeCmd;

#[async_trait]
impl RunCmd for HomeCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Most viewed entries and category shortcuts")
            .arg(
                Arg::new("search")
                    .long("search")
                    .short('s')
                    .help("Jump straight to the explore listing for this term")
                    .action(clap::ArgAction::Set),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), ArchiveError> {
        let ctx = Context::load().await?;
        let mut home = HomeView::new();

        if let Some(term) = args.get_one::<String>("search") {
            home.set_search_input(term);
            return match home.submit_search() {
                Some(location) => explore::browse(&ctx, location, false).await,
                None => Err(ArchiveError::validation("Search term is empty")),
            };
        }

        println!("{}", "Discover the Soul of Bharat".bold());
        println!();
        home.load(&ctx.archive).await;
        println!("{}", "Featured Entries".bold());
        helpers::print_listing(home.featured());

        println!();
        println!("{}", "Explore by Category".bold());
        for category in FEATURED_CATEGORIES {
            println!("  {:<14} {}", category.badge(), category_location(category));
        }
        Ok(())
    }
}
