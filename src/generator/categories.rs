//! Category taxonomy synthesis for the Yandex feed.
//!
//! The catalog carries only a free-text category name per product, but the
//! YML format wants numeric category ids. The registry assigns them on the
//! fly: one id per distinct name, in first-seen order. It lives for exactly
//! one feed build - input order determines the ids, so reusing a registry
//! across builds (or reordering the input) would change the output.

use crate::catalog::Product;
use rustc_hash::FxHashMap;

/// First synthesized category id; everything below is reserved for the
/// fixed root categories of the feed.
pub const FIRST_CATEGORY_ID: u32 = 100;

/// Category name assigned to products without a usable category.
pub const FALLBACK_CATEGORY: &str = "Другое";

/// Name-to-id table built from one scan over the products.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    /// Names in first-seen order
    names: Vec<String>,
    ids: FxHashMap<String, u32>,
}

impl CategoryRegistry {
    /// Build the registry by scanning all products once, in input order.
    pub fn from_products(products: &[Product]) -> Self {
        let mut registry = Self::default();
        for product in products {
            registry.insert(normalize(&product.other_category));
        }
        registry
    }

    fn insert(&mut self, name: &str) {
        if !self.ids.contains_key(name) {
            let id = FIRST_CATEGORY_ID + self.names.len() as u32;
            self.ids.insert(name.to_owned(), id);
            self.names.push(name.to_owned());
        }
    }

    /// Id for a product's raw category value. Present for every product the
    /// registry was built from.
    pub fn resolve(&self, raw: &str) -> Option<u32> {
        self.ids.get(normalize(raw)).copied()
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.names.iter().map(|name| (name.as_str(), self.ids[name]))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Trim the raw value; blank names collapse to the fallback category.
fn normalize(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.is_empty() { FALLBACK_CATEGORY } else { trimmed }
}
