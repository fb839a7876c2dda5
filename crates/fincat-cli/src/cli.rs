//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::catalog::CatalogCommand;

/// Financial product catalog manager.
#[derive(Parser, Debug)]
#[command(name = "fincat")]
#[command(author, version = env!("FINCAT_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Product catalog operations
    Catalog(CatalogCommand),
}
