use async_trait::async_trait;
use clap::{Arg, Command};

use libarchive::core::{seo, EntrySource};
use libarchive::error::ArchiveError;
use libarchive::opts::ListEntriesOpts;

use crate::cmd::RunCmd;
use crate::helpers::Context;

pub const NAME: &str = "sitemap";
pub struct SitemapCmd;

#[async_trait]
impl RunCmd for SitemapCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Print the sitemap XML of the site")
            .arg(
                Arg::new("remote")
                    .long("remote")
                    .help("Fetch the sitemap the API serves instead of building one")
                    .action(clap::ArgAction::SetTrue),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), ArchiveError> {
        let ctx = Context::load().await?;
        if args.get_flag("remote") {
            println!("{}", ctx.archive.sitemap().await?);
            return Ok(());
        }

        let mut entries = Vec::new();
        let mut opts = ListEntriesOpts::admin();
        let mut page = 1;
        loop {
            opts.page = Some(page);
            let result = ctx.archive.list_entries(&opts).await?;
            entries.extend(result.entries);
            if page >= result.total_pages {
                break;
            }
            page += 1;
        }
        println!("{}", seo::sitemap(&entries, &ctx.site_url));
        Ok(())
    }
}
