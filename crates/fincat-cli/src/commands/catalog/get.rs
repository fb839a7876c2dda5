//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fincat_core::ProductId;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Product id to fetch
    pub id: String,

    /// Print the product as JSON
    #[arg(long)]
    pub json: bool,

    /// Catalog URL (overrides the stored selection)
    #[arg(long)]
    pub catalog: Option<String>,
}

pub async fn run(args: GetArgs) -> Result<()> {
    let id = ProductId::new(&args.id).context("Invalid product id")?;

    let catalog = config::resolve_catalog(args.catalog.as_deref())?;
    let repository = config::open_repository(&catalog)?;

    let product = repository
        .get_by_id(&id)
        .await
        .context("Failed to fetch product")?;

    if args.json {
        output::json_pretty(&product)?;
    } else {
        output::field("ID", product.id.as_str());
        output::field("Name", &product.name);
        output::field("Description", &product.description);
        output::field("Logo", &product.logo);
        output::field("Released", &product.release_date.to_string());
        output::field("Revision", &product.revision_date.to_string());
    }

    Ok(())
}
