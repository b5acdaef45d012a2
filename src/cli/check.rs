//! Catalog inspection without building or publishing anything.

use crate::{
    catalog::parse_catalog, config::FeedConfig, generator::categories::CategoryRegistry, log,
};
use anyhow::{Context, Result};
use std::fs;

/// Parse the catalog and report products and synthesized categories.
pub fn run(config: &FeedConfig) -> Result<()> {
    let catalog_path = config.catalog_path();
    let data = fs::read_to_string(&catalog_path)
        .with_context(|| format!("failed to read catalog {}", catalog_path.display()))?;
    let products = parse_catalog(&data)?;
    let registry = CategoryRegistry::from_products(&products);

    log!("check"; "{} products, {} categories", products.len(), registry.len());
    for (name, id) in registry.entries() {
        println!("{id:>6}  {name}");
    }
    Ok(())
}
