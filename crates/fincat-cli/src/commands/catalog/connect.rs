//! Connect command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use fincat_core::CatalogUrl;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Catalog base URL (https://... or file:///...)
    pub url: String,

    /// Skip the reachability check
    #[arg(long)]
    pub no_check: bool,
}

pub async fn run(args: ConnectArgs) -> Result<()> {
    let catalog = CatalogUrl::new(&args.url).context("Invalid catalog URL")?;

    let count = if args.no_check {
        None
    } else {
        eprintln!("{}", "Checking catalog...".dimmed());

        let repository = config::open_repository(&catalog)?;
        let products = repository
            .list()
            .await
            .context("Could not read the catalog")?;

        Some(products.len())
    };

    config::save_catalog(&catalog).context("Failed to save catalog selection")?;

    output::success("Catalog selected");
    println!();
    output::field("Catalog", catalog.as_str());
    if let Some(count) = count {
        output::field("Products", &count.to_string());
    }

    Ok(())
}
