//! Offline feed build: local catalog file in, XML documents out.

use crate::{
    catalog::parse_catalog,
    config::FeedConfig,
    generator::{google::GoogleFeed, yandex::YandexFeed},
    log,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Build both feeds from the configured catalog file.
pub fn run(config: &FeedConfig) -> Result<()> {
    let catalog_path = config.catalog_path();
    let data = fs::read_to_string(&catalog_path)
        .with_context(|| format!("failed to read catalog {}", catalog_path.display()))?;
    let products = parse_catalog(&data)?;
    log!("catalog"; "{} products from {}", products.len(), catalog_path.display());

    // The builders share no mutable state, so they run in parallel
    let (google, yandex) = rayon::join(
        || GoogleFeed::build(&config.shop, &products),
        || YandexFeed::build(&config.shop, &products),
    );

    write_feed(&config.google_output(), &google?, "google")?;
    write_feed(&config.yandex_output(), &yandex?, "yandex")?;
    Ok(())
}

fn write_feed(path: &Path, xml: &str, label: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, xml).with_context(|| format!("failed to write {}", path.display()))?;

    log!(label; "{}", path.display());
    Ok(())
}
