//! List command implementation.

use std::num::NonZeroUsize;

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;

use fincat_core::ProductList;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter products by name or description
    #[arg(long)]
    pub search: Option<String>,

    /// Page to display (starting at 1)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Products per page (must be at least 1)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Print products as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Catalog URL (overrides the stored selection)
    #[arg(long)]
    pub catalog: Option<String>,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let page_size = args
        .page_size
        .map(|size| NonZeroUsize::new(size).context("Page size must be at least 1"))
        .transpose()?;

    let catalog = config::resolve_catalog(args.catalog.as_deref())?;
    let repository = config::open_repository(&catalog)?;

    let mut list = ProductList::new(repository);
    list.load().await;
    if let Some(message) = list.error_message() {
        bail!("{message}");
    }

    if let Some(size) = page_size {
        list.set_page_size(size);
    }
    if let Some(term) = &args.search {
        list.search(term.as_str());
    }
    if args.page > 1 {
        list.set_page(args.page);
    }

    let page = list.page();

    // JSON callers get the whole page, metadata included, even when empty.
    if args.json {
        output::json_pretty(&page)?;
        return Ok(());
    }

    if page.items.is_empty() {
        eprintln!("{}", "No products found.".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{:<12} {:<32} {:<12} {:<12}",
            "ID", "NAME", "RELEASE", "REVISION"
        )
        .dimmed()
    );
    for product in &page.items {
        println!(
            "{:<12} {:<32} {:<12} {:<12}",
            product.id.as_str(),
            product.name,
            product.release_date.to_string(),
            product.revision_date.to_string()
        );
    }

    eprintln!();
    eprintln!(
        "{}",
        format!(
            "Page {} of {} ({} products)",
            page.current_page, page.total_pages, page.total
        )
        .dimmed()
    );

    Ok(())
}
