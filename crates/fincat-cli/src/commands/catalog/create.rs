//! Create command implementation.

use anyhow::{Result, bail};
use clap::Args;

use fincat_core::error::UNEXPECTED_ERROR_MESSAGE;
use fincat_core::{ProductForm, SubmitOutcome};

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Product id (3-10 characters)
    #[arg(long)]
    pub id: String,

    /// Product name
    #[arg(long)]
    pub name: String,

    /// Product description
    #[arg(long)]
    pub description: String,

    /// Logo URL
    #[arg(long)]
    pub logo: String,

    /// Release date (YYYY-MM-DD, today or later)
    #[arg(long)]
    pub release_date: String,

    /// Catalog URL (overrides the stored selection)
    #[arg(long)]
    pub catalog: Option<String>,
}

pub async fn run(args: CreateArgs) -> Result<()> {
    let catalog = config::resolve_catalog(args.catalog.as_deref())?;
    let repository = config::open_repository(&catalog)?;

    let mut form = ProductForm::create(repository);
    form.set_id(&args.id);
    form.set_name(&args.name);
    form.set_description(&args.description);
    form.set_logo(&args.logo);
    form.set_release_date(&args.release_date);

    // Wait for the id uniqueness check to finish
    form.settle().await;

    match form.submit().await {
        SubmitOutcome::Saved(product) => {
            output::success(&format!("Product '{}' created", product.id));
            println!();
            output::field("Name", &product.name);
            output::field("Released", &product.release_date.to_string());
            output::field("Revision", &product.revision_date.to_string());
            Ok(())
        }
        SubmitOutcome::Blocked(_) => {
            for (field, error) in form.errors() {
                output::error(&format!("{field} {error}"));
            }
            bail!("Product was not created");
        }
        SubmitOutcome::Failed => {
            bail!(
                "{}",
                form.error_message().unwrap_or(UNEXPECTED_ERROR_MESSAGE)
            );
        }
    }
}
