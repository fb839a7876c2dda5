//! Verify command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Product id to check
    pub id: String,

    /// Catalog URL (overrides the stored selection)
    #[arg(long)]
    pub catalog: Option<String>,
}

pub async fn run(args: VerifyArgs) -> Result<()> {
    let catalog = config::resolve_catalog(args.catalog.as_deref())?;
    let repository = config::open_repository(&catalog)?;

    let exists = repository
        .verify_id_exists(&args.id)
        .await
        .context("Failed to verify product id")?;

    if exists {
        println!("Id '{}' is already in use", args.id);
    } else {
        output::success(&format!("Id '{}' is available", args.id));
    }

    Ok(())
}
