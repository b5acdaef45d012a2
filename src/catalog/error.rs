//! Catalog error types.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Errors raised while turning catalog bytes into typed products.
///
/// Every variant is fail-fast: one bad product aborts the whole catalog,
/// so no feed is ever built from partial input.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("catalog root must be a JSON array of products")]
    NotAnArray,

    #[error("malformed product {product}: {reason}")]
    Malformed {
        product: ProductIdent,
        reason: String,
    },
}

impl CatalogError {
    pub(crate) fn malformed(raw: &Value, index: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            product: ProductIdent::from_raw(raw, index),
            reason: reason.into(),
        }
    }
}

/// How a malformed product is reported: by `offerId` when the raw JSON
/// carries one, by array position otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductIdent {
    Id(String),
    Index(usize),
}

impl ProductIdent {
    fn from_raw(raw: &Value, index: usize) -> Self {
        match raw.get("offerId") {
            Some(Value::String(id)) => Self::Id(id.clone()),
            Some(Value::Number(id)) => Self::Id(id.to_string()),
            _ => Self::Index(index),
        }
    }
}

impl fmt::Display for ProductIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "'{id}'"),
            Self::Index(index) => write!(f, "at index {index}"),
        }
    }
}
