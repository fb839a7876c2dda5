//! Catalog subcommand implementations.

mod connect;
mod create;
mod delete;
mod get;
mod list;
mod update;
mod verify;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct CatalogCommand {
    #[command(subcommand)]
    pub command: CatalogSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CatalogSubcommand {
    /// Select the catalog to work against
    Connect(connect::ConnectArgs),

    /// List products in the catalog
    List(list::ListArgs),

    /// Fetch a single product
    Get(get::GetArgs),

    /// Add a new product to the catalog
    Create(create::CreateArgs),

    /// Edit an existing product
    Update(update::UpdateArgs),

    /// Delete a product from the catalog
    Delete(delete::DeleteArgs),

    /// Check whether a product id is taken
    Verify(verify::VerifyArgs),
}

pub async fn handle(cmd: CatalogCommand) -> Result<()> {
    match cmd.command {
        CatalogSubcommand::Connect(args) => connect::run(args).await,
        CatalogSubcommand::List(args) => list::run(args).await,
        CatalogSubcommand::Get(args) => get::run(args).await,
        CatalogSubcommand::Create(args) => create::run(args).await,
        CatalogSubcommand::Update(args) => update::run(args).await,
        CatalogSubcommand::Delete(args) => delete::run(args).await,
        CatalogSubcommand::Verify(args) => verify::run(args).await,
    }
}
