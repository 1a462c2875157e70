//! `hygge catalog` - list the demo catalog.

use crate::output::Output;
use anyhow::Result;
use clap::Args;
use console::style;
use hygge_commerce::catalog::Catalog;

#[derive(Args)]
pub struct CatalogArgs {
    /// Only show products in this category
    #[arg(short, long)]
    pub category: Option<String>,
}

pub fn run(args: &CatalogArgs, catalog: &Catalog, output: &Output) -> Result<()> {
    let products: Vec<_> = catalog
        .all()
        .iter()
        .filter(|p| {
            args.category
                .as_deref()
                .map_or(true, |c| p.category.eq_ignore_ascii_case(c))
        })
        .collect();

    if output.is_json() {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    if products.is_empty() {
        output.info("No products match.");
        return Ok(());
    }

    for product in products {
        output.line(&format!(
            "{:<16} {:<24} {:<10} {:>10}",
            style(product.id.as_str()).cyan(),
            product.name,
            style(&product.category).dim(),
            product.unit_price.display(),
        ));
    }

    Ok(())
}
