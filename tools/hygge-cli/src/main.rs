//! Hygge CLI - demo storefront for the hygge-commerce crate.
//!
//! Commands:
//! - `hygge catalog` - List the demo catalog
//! - `hygge order` - Walk a cart through the full checkout flow

mod commands;
mod output;
mod seed;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, OrderArgs};

/// Hygge - demo storefront shell
#[derive(Parser)]
#[command(name = "hygge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the demo catalog
    Catalog(CatalogArgs),

    /// Place a demo order through the checkout flow
    Order(OrderArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);
    let catalog = seed::demo_catalog();

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(&args, &catalog, &output),
        Commands::Order(args) => commands::order::run(&args, &catalog, &output).await,
    };

    if let Err(ref e) = result {
        output.error(&format!("{e:#}"));
        std::process::exit(1);
    }

    Ok(())
}
