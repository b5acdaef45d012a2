//! Product catalog: the typed boundary over the upstream JSON export.
//!
//! The upstream catalog is a JSON array of product objects. Everything the
//! feed builders consume goes through [`parse_catalog`], which replaces
//! duck-typed field lookups with a typed schema: any missing or ill-typed
//! field surfaces as a [`CatalogError::Malformed`] naming the product and
//! the field, and nothing downstream ever sees a partial catalog.

mod error;

pub use error::{CatalogError, ProductIdent};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One entry of the product catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique offer identifier, also used to derive product page URLs.
    pub offer_id: String,
    pub title: String,
    pub description: String,
    pub vendor: String,
    /// Free-text category name; blank values fall back to a synthetic category.
    pub other_category: String,
    /// Whether the product is currently published on the storefront.
    pub is_visible: bool,
    pub price: Price,
    /// Ordered picture URLs; the first entry is the primary image.
    pub pictures: Vec<String>,
}

/// Product price as exported upstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Numeric-as-string; older exports emitted raw numbers, both are accepted.
    #[serde(deserialize_with = "string_or_number")]
    pub base_price: String,
    /// Currency code, verbatim from the catalog (typically the legacy "RUR").
    pub currency_id: String,
}

/// Parse the catalog JSON into typed products, fail-fast.
pub fn parse_catalog(data: &str) -> Result<Vec<Product>, CatalogError> {
    let root: Value = serde_json::from_str(data)?;
    let Value::Array(entries) = root else {
        return Err(CatalogError::NotAnArray);
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_product(raw, index))
        .collect()
}

fn parse_product(raw: &Value, index: usize) -> Result<Product, CatalogError> {
    let product = Product::deserialize(raw)
        .map_err(|err| CatalogError::malformed(raw, index, err.to_string()))?;

    // First picture is the primary image in both feeds
    if product.pictures.is_empty() {
        return Err(CatalogError::malformed(
            raw,
            index,
            "pictures must contain at least one entry",
        ));
    }

    Ok(product)
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
