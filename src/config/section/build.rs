//! `[build]` section: local catalog and output locations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Catalog JSON file, relative to the project root.
    pub catalog: PathBuf,
    /// Directory the generated feeds are written into.
    pub output: PathBuf,
    /// Google feed file path, relative to `output`.
    pub google: PathBuf,
    /// Yandex feed file path, relative to `output`.
    pub yandex: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            catalog: "feed.json".into(),
            output: "feeds".into(),
            google: "google/google_merchant_center_feed.xml".into(),
            yandex: "yandex/yandex_products_feed.xml".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    #[test]
    fn test_defaults() {
        let config = test_config("");
        assert_eq!(config.build.catalog, PathBuf::from("feed.json"));
        assert_eq!(config.build.output, PathBuf::from("feeds"));
        assert_eq!(
            config.build.google,
            PathBuf::from("google/google_merchant_center_feed.xml")
        );
        assert_eq!(
            config.build.yandex,
            PathBuf::from("yandex/yandex_products_feed.xml")
        );
    }

    #[test]
    fn test_custom_config() {
        let config = test_config("[build]\ncatalog = \"export/products.json\"\noutput = \"out\"");
        assert_eq!(config.build.catalog, PathBuf::from("export/products.json"));
        assert_eq!(config.build.output, PathBuf::from("out"));
        // Untouched fields keep their defaults
        assert_eq!(
            config.build.yandex,
            PathBuf::from("yandex/yandex_products_feed.xml")
        );
    }
}
