//! Delete command implementation.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::Args;

use fincat_core::ProductList;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Product id to delete
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Catalog URL (overrides the stored selection)
    #[arg(long)]
    pub catalog: Option<String>,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    let catalog = config::resolve_catalog(args.catalog.as_deref())?;
    let repository = config::open_repository(&catalog)?;

    let mut list = ProductList::new(repository);
    list.load().await;
    if let Some(message) = list.error_message() {
        bail!("{message}");
    }

    let product = list
        .all_products()
        .iter()
        .find(|p| p.id.as_str() == args.id)
        .cloned()
        .with_context(|| format!("Product '{}' was not found.", args.id))?;

    list.request_delete(product.clone());

    // Confirm unless --yes
    if !args.yes {
        eprint!(
            "This will delete product '{}' ({}). Continue? [y/N] ",
            product.id, product.name
        );
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            list.cancel_delete();
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    list.confirm_delete().await;
    // A failed delete keeps the selection; a failed reload afterwards does not.
    if list.pending_delete().is_some() {
        bail!(
            "{}",
            list.error_message().unwrap_or("Product was not deleted")
        );
    }

    output::success(&format!("Product '{}' deleted", product.id));

    Ok(())
}
