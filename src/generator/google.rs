//! Google Merchant Center feed generation.
//!
//! Produces an RSS 2.0 document with product attributes in the merchant
//! `g:` namespace. Element order inside `item` is part of the contract -
//! some ingestion pipelines read positionally - so the children are written
//! in a fixed sequence, not in whatever order a map would yield.

use crate::{
    catalog::Product,
    config::ShopConfig,
    generator::xml::{self, write_text_element},
};
use anyhow::Result;
use quick_xml::Writer;
use std::io::{self, Write};

/// Google Merchant XML namespace, bound to the `g:` prefix on the root.
const MERCHANT_NS: &str = "http://base.google.com/ns/1.0";

/// Google Merchant feed builder.
pub struct GoogleFeed<'a> {
    shop: &'a ShopConfig,
    products: &'a [Product],
}

impl<'a> GoogleFeed<'a> {
    /// Build the feed document for the given products, in input order.
    pub fn build(shop: &'a ShopConfig, products: &'a [Product]) -> Result<String> {
        Self { shop, products }.into_xml()
    }

    fn into_xml(self) -> Result<String> {
        xml::document(
            "rss",
            &[("xmlns:g", MERCHANT_NS), ("version", "2.0")],
            |w| {
                w.create_element("channel").write_inner_content(|w| {
                    write_text_element(w, "title", &self.shop.name)?;
                    write_text_element(w, "link", self.shop.base_url())?;
                    write_text_element(w, "description", &self.shop.description)?;
                    for product in self.products {
                        self.write_item(w, product)?;
                    }
                    Ok(())
                })?;
                Ok(())
            },
        )
    }

    fn write_item<W: Write>(&self, w: &mut Writer<W>, product: &Product) -> io::Result<()> {
        let (primary, additional) = product.pictures.split_first().ok_or_else(|| {
            io::Error::other(format!("product '{}' has no pictures", product.offer_id))
        })?;

        w.create_element("item").write_inner_content(|w| {
            write_text_element(w, "g:id", &product.offer_id)?;
            write_text_element(w, "g:title", &product.title)?;
            write_text_element(w, "g:description", &product.description)?;
            write_text_element(w, "link", &self.shop.product_url(&product.offer_id))?;
            write_text_element(w, "g:image_link", primary)?;
            for picture in additional {
                write_text_element(w, "g:additional_image_link", picture)?;
            }
            write_text_element(w, "g:condition", "новый")?;
            write_text_element(
                w,
                "g:availability",
                if product.is_visible {
                    "in_stock"
                } else {
                    "out_of_stock"
                },
            )?;
            write_text_element(
                w,
                "g:price",
                &format!(
                    "{}.00 {}",
                    product.price.base_price,
                    display_currency(&product.price.currency_id)
                ),
            )?;
            write_text_element(w, "g:brand", &product.vendor)?;
            Ok(())
        })?;
        Ok(())
    }
}

/// Merchant Center wants the ISO code; the catalog still uses the legacy "RUR".
fn display_currency(currency_id: &str) -> &str {
    if currency_id == "RUR" { "RUB" } else { currency_id }
}
