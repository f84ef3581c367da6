use async_trait::async_trait;
use clap::{Arg, Command};
use colored::Colorize;

use libarchive::core::seo;
use libarchive::error::ArchiveError;

use crate::cmd::RunCmd;
use crate::helpers::{self, Context};

pub const NAME: &str = "show";
pub struct ShowCmd;

#[async_trait]
impl RunCmd for ShowCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Show one entry with its comments")
            .arg(Arg::new("slug").required(true).help("Slug of the entry"))
            .arg(
                Arg::new("seo")
                    .long("seo")
                    .help("Also print the page meta tags and schema.org data")
                    .action(clap::ArgAction::SetTrue),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), ArchiveError> {
        let slug = args
            .get_one::<String>("slug")
            .ok_or_else(|| ArchiveError::basic_str("Must supply a slug"))?;
        let ctx = Context::load().await?;
        print_detail(&ctx, slug, args.get_flag("seo")).await
    }
}

pub async fn print_detail(ctx: &Context, slug: &str, with_seo: bool) -> Result<(), ArchiveError> {
    let view = ctx.detail(slug).await?;
    let Some(interaction) = view.interaction() else {
        return Err(ArchiveError::entry_not_found(slug));
    };
    let entry = interaction.entry();
    helpers::print_entry(entry, interaction.liked(), interaction.like_count());

    if with_seo {
        let tags = seo::meta_tags(entry, &ctx.site_url);
        println!();
        println!("{}", "Meta".bold());
        println!("  title:       {}", tags.title);
        println!("  description: {}", tags.description);
        println!("  keywords:    {}", tags.keywords);
        println!("  image:       {}", tags.image);
        println!("  url:         {}", tags.url);
        let data = seo::structured_data(entry, &ctx.site_url);
        println!("{}", serde_json::to_string_pretty(&data)?);
    }
    Ok(())
}
