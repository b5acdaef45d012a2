//! Storage round trip: fetch the catalog, rebuild both feeds, publish.
//!
//! This is the deployed shape of the tool - a one-shot job triggered on a
//! schedule. Any storage or catalog error aborts the run with context; no
//! partial feed is ever published.

use crate::{
    catalog::parse_catalog,
    config::FeedConfig,
    debug,
    generator::{google::GoogleFeed, yandex::YandexFeed},
    log,
    storage::ObjectStore,
};
use anyhow::Result;

const FEED_CONTENT_TYPE: &str = "application/xml";

/// Run the full fetch-build-publish cycle.
pub fn run(config: &FeedConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(sync_feeds(config))
}

async fn sync_feeds(config: &FeedConfig) -> Result<()> {
    let storage = &config.storage;
    debug!("sync"; "endpoint {}, bucket {}", storage.endpoint, storage.bucket);

    let store = ObjectStore::connect(storage).await;
    let data = store.fetch(&storage.catalog_key).await?;
    let products = parse_catalog(&data)?;
    log!("catalog"; "{} products from s3://{}/{}", products.len(), storage.bucket, storage.catalog_key);

    let google = GoogleFeed::build(&config.shop, &products)?;
    store
        .put(&storage.google_key, google, FEED_CONTENT_TYPE)
        .await?;
    log!("google"; "published {}", storage.google_key);

    let yandex = YandexFeed::build(&config.shop, &products)?;
    store
        .put(&storage.yandex_key, yandex, FEED_CONTENT_TYPE)
        .await?;
    log!("yandex"; "published {}", storage.yandex_key);

    Ok(())
}
