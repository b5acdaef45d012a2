//! `[shop]` section: storefront identity baked into both feeds.
//!
//! The defaults reproduce the Яндекс Музей storefront, so a bare
//! `vitrina.toml` (or none at all) yields the production feed headers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Shop display name (feed channel title / YML shop name).
    pub name: String,
    /// Legal company name (YML catalog only).
    pub company: String,
    /// Storefront base URL; all product links are derived from it.
    pub url: String,
    /// Channel description (Google feed only).
    pub description: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: "Яндекс Музей".into(),
            company: "Яндекс".into(),
            url: "https://museum.yandex.ru".into(),
            description: "Фид Яндекс Музея".into(),
        }
    }
}

impl ShopConfig {
    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// YML shop URL, always with a trailing slash.
    pub fn shop_url(&self) -> String {
        format!("{}/", self.base_url())
    }

    /// Product page URL used by the Google feed.
    pub fn product_url(&self, offer_id: &str) -> String {
        format!("{}/product/{offer_id}", self.base_url())
    }

    /// Offer URL used by the Yandex feed.
    pub fn offer_url(&self, offer_id: &str) -> String {
        format!("{}/{offer_id}", self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let shop = ShopConfig::default();
        assert_eq!(shop.name, "Яндекс Музей");
        assert_eq!(shop.company, "Яндекс");
        assert_eq!(shop.url, "https://museum.yandex.ru");
        assert_eq!(shop.description, "Фид Яндекс Музея");
    }

    #[test]
    fn test_urls_without_trailing_slash() {
        let shop = ShopConfig::default();
        assert_eq!(shop.shop_url(), "https://museum.yandex.ru/");
        assert_eq!(
            shop.product_url("sku-1"),
            "https://museum.yandex.ru/product/sku-1"
        );
        assert_eq!(shop.offer_url("sku-1"), "https://museum.yandex.ru/sku-1");
    }

    #[test]
    fn test_urls_with_trailing_slash() {
        let shop = ShopConfig {
            url: "https://shop.example.com/".into(),
            ..ShopConfig::default()
        };
        assert_eq!(shop.shop_url(), "https://shop.example.com/");
        assert_eq!(
            shop.product_url("a1"),
            "https://shop.example.com/product/a1"
        );
        assert_eq!(shop.offer_url("a1"), "https://shop.example.com/a1");
    }
}
