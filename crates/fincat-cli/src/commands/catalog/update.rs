//! Update command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use fincat_core::error::UNEXPECTED_ERROR_MESSAGE;
use fincat_core::{ProductForm, ProductId, SubmitOutcome};

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Product id to edit
    pub id: String,

    /// New product name
    #[arg(long)]
    pub name: Option<String>,

    /// New product description
    #[arg(long)]
    pub description: Option<String>,

    /// New logo URL
    #[arg(long)]
    pub logo: Option<String>,

    /// New release date (YYYY-MM-DD)
    #[arg(long)]
    pub release_date: Option<String>,

    /// Catalog URL (overrides the stored selection)
    #[arg(long)]
    pub catalog: Option<String>,
}

pub async fn run(args: UpdateArgs) -> Result<()> {
    let id = ProductId::new(&args.id).context("Invalid product id")?;

    let catalog = config::resolve_catalog(args.catalog.as_deref())?;
    let repository = config::open_repository(&catalog)?;

    let current = repository
        .get_by_id(&id)
        .await
        .context("Failed to fetch product")?;

    let mut form = ProductForm::edit(repository, &current);
    if let Some(name) = &args.name {
        form.set_name(name);
    }
    if let Some(description) = &args.description {
        form.set_description(description);
    }
    if let Some(logo) = &args.logo {
        form.set_logo(logo);
    }
    if let Some(release) = &args.release_date {
        form.set_release_date(release);
    }

    form.settle().await;

    match form.submit().await {
        SubmitOutcome::Saved(product) => {
            output::success(&format!("Product '{}' updated", product.id));
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
            bail!("Product was not updated");
        }
        SubmitOutcome::Failed => {
            bail!(
                "{}",
                form.error_message().unwrap_or(UNEXPECTED_ERROR_MESSAGE)
            );
        }
    }
}
