//! `[storage]` section: object storage endpoint, bucket and object keys.
//!
//! Credentials are NOT configured here; they come from the standard AWS
//! environment/profile chain (`AWS_ACCESS_KEY_ID` etc.).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// S3-compatible endpoint URL.
    pub endpoint: String,
    /// Region name passed to the SDK (Yandex Object Storage uses ru-central1).
    pub region: String,
    /// Bucket holding both the source catalog and the published feeds.
    pub bucket: String,
    /// Object key of the source catalog JSON.
    pub catalog_key: String,
    /// Object key the Google Merchant feed is published under.
    pub google_key: String,
    /// Object key the Yandex Market feed is published under.
    pub yandex_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://s3.yandexcloud.net".into(),
            region: "ru-central1".into(),
            bucket: "yandex-museum".into(),
            catalog_key: "feeds/feed.json".into(),
            google_key: "feeds/google/google_merchant_center_feed.xml".into(),
            yandex_key: "feeds/yandex/yandex_products_feed.xml".into(),
        }
    }
}
