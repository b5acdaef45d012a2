//! Yandex Market (YML catalog) feed generation.
//!
//! Unlike the Google feed, prices and currency codes are passed through
//! verbatim, every picture is a plain `picture` element, and offers point
//! into a category taxonomy synthesized from the catalog's free-text
//! category names (see [`categories`](super::categories)).
//!
//! The registry is fully populated by a scan pass before any XML is
//! written, so the `categories` block can precede `offers` in the document
//! while still covering every offer.

use crate::{
    catalog::Product,
    config::ShopConfig,
    generator::{
        categories::CategoryRegistry,
        xml::{self, write_text_element},
    },
};
use anyhow::Result;
use chrono::Local;
use quick_xml::{Writer, events::BytesText};
use std::io::{self, Write};

/// Root category every synthesized category hangs off.
const ROOT_CATEGORY_ID: &str = "1";
const ROOT_CATEGORY_NAME: &str = "Все товары";

/// Yandex Market feed builder.
pub struct YandexFeed<'a> {
    shop: &'a ShopConfig,
    products: &'a [Product],
}

impl<'a> YandexFeed<'a> {
    /// Build the feed document for the given products, in input order,
    /// stamped with the current local time.
    pub fn build(shop: &'a ShopConfig, products: &'a [Product]) -> Result<String> {
        let date = Local::now().format("%Y-%m-%d %H:%M").to_string();
        Self { shop, products }.into_xml(&date)
    }

    fn into_xml(self, date: &str) -> Result<String> {
        let registry = CategoryRegistry::from_products(self.products);

        xml::document("yml_catalog", &[("date", date)], |w| {
            w.create_element("shop").write_inner_content(|w| {
                write_text_element(w, "name", &self.shop.name)?;
                write_text_element(w, "company", &self.shop.company)?;
                write_text_element(w, "url", &self.shop.shop_url())?;

                w.create_element("currencies").write_inner_content(|w| {
                    w.create_element("currency")
                        .with_attribute(("id", "RUR"))
                        .with_attribute(("rate", "1"))
                        .write_empty()?;
                    Ok(())
                })?;

                w.create_element("categories").write_inner_content(|w| {
                    w.create_element("category")
                        .with_attribute(("id", ROOT_CATEGORY_ID))
                        .write_text_content(BytesText::new(ROOT_CATEGORY_NAME))?;
                    for (name, id) in registry.entries() {
                        w.create_element("category")
                            .with_attribute(("id", id.to_string().as_str()))
                            .with_attribute(("parentId", ROOT_CATEGORY_ID))
                            .write_text_content(BytesText::new(name))?;
                    }
                    Ok(())
                })?;

                w.create_element("offers").write_inner_content(|w| {
                    for product in self.products {
                        self.write_offer(w, product, &registry)?;
                    }
                    Ok(())
                })?;
                Ok(())
            })?;
            Ok(())
        })
    }

    fn write_offer<W: Write>(
        &self,
        w: &mut Writer<W>,
        product: &Product,
        registry: &CategoryRegistry,
    ) -> io::Result<()> {
        let category_id = registry.resolve(&product.other_category).ok_or_else(|| {
            io::Error::other(format!(
                "product '{}' missing from category registry",
                product.offer_id
            ))
        })?;

        w.create_element("offer")
            .with_attribute(("id", product.offer_id.as_str()))
            .write_inner_content(|w| {
                write_text_element(w, "name", &product.title)?;
                write_text_element(w, "url", &self.shop.offer_url(&product.offer_id))?;
                write_text_element(w, "price", &product.price.base_price)?;
                write_text_element(w, "currencyId", &product.price.currency_id)?;
                write_text_element(w, "categoryId", &category_id.to_string())?;
                write_text_element(w, "vendor", &product.vendor)?;
                for picture in &product.pictures {
                    write_text_element(w, "picture", picture)?;
                }
                write_text_element(w, "description", &product.description)?;
                Ok(())
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Price;

    const DATE: &str = "2024-06-15 14:30";

    fn make_shop() -> ShopConfig {
        ShopConfig::default()
    }

    fn make_product(id: &str, category: &str) -> Product {
        Product {
            offer_id: id.to_string(),
            title: format!("Товар {id}"),
            description: "Описание".to_string(),
            vendor: "Яндекс".to_string(),
            other_category: category.to_string(),
            is_visible: true,
            price: Price {
                base_price: "199".to_string(),
                currency_id: "RUR".to_string(),
            },
            pictures: vec!["https://cdn.example.com/1.jpg".to_string()],
        }
    }

    fn build_at(products: &[Product]) -> String {
        let shop = make_shop();
        YandexFeed {
            shop: &shop,
            products,
        }
        .into_xml(DATE)
        .unwrap()
    }

    #[test]
    fn test_shop_header() {
        let xml = build_at(&[]);

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<yml_catalog date="2024-06-15 14:30">"#));
        assert!(xml.contains("<name>Яндекс Музей</name>"));
        assert!(xml.contains("<company>Яндекс</company>"));
        assert!(xml.contains("<url>https://museum.yandex.ru/</url>"));
        assert!(xml.contains(r#"<currency id="RUR" rate="1"/>"#));
        assert!(xml.contains(r#"<category id="1">Все товары</category>"#));
    }

    #[test]
    fn test_shop_child_order() {
        let xml = build_at(&[make_product("sku-1", "Сувениры")]);
        let tags = [
            "<name>",
            "<company>",
            "<url>",
            "<currencies>",
            "<categories>",
            "<offers>",
        ];
        let positions: Vec<usize> = tags
            .iter()
            .map(|tag| xml.find(tag).unwrap_or_else(|| panic!("missing {tag}")))
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "shop children out of order: {positions:?}"
        );
    }

    #[test]
    fn test_category_synthesis() {
        let products = [
            make_product("1", "A"),
            make_product("2", "B"),
            make_product("3", "A"),
            make_product("4", ""),
        ];
        let xml = build_at(&products);

        assert!(xml.contains(r#"<category id="100" parentId="1">A</category>"#));
        assert!(xml.contains(r#"<category id="101" parentId="1">B</category>"#));
        assert!(xml.contains(r#"<category id="102" parentId="1">Другое</category>"#));

        // Offers reference the synthesized ids in product order
        let ids: Vec<&str> = xml
            .match_indices("<categoryId>")
            .map(|(start, _)| {
                let rest = &xml[start + "<categoryId>".len()..];
                &rest[..rest.find('<').unwrap()]
            })
            .collect();
        assert_eq!(ids, vec!["100", "101", "100", "102"]);
    }

    #[test]
    fn test_offer_id_attribute() {
        let xml = build_at(&[make_product("sku-1", "Сувениры")]);
        assert!(xml.contains(r#"<offer id="sku-1">"#));
    }

    #[test]
    fn test_offer_child_order() {
        let mut product = make_product("sku-1", "Сувениры");
        product.pictures.push("https://cdn.example.com/2.jpg".to_string());
        let xml = build_at(&[product]);

        let offer = &xml[xml.find("<offer").expect("offer present")..];
        let tags = [
            "<name>",
            "<url>",
            "<price>",
            "<currencyId>",
            "<categoryId>",
            "<vendor>",
            "<picture>",
            "<description>",
        ];
        let positions: Vec<usize> = tags
            .iter()
            .map(|tag| offer.find(tag).unwrap_or_else(|| panic!("missing {tag}")))
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "offer children out of order: {positions:?}"
        );
    }

    #[test]
    fn test_price_and_currency_verbatim() {
        let mut product = make_product("sku-1", "Сувениры");
        product.price = Price {
            base_price: "199".to_string(),
            currency_id: "RUR".to_string(),
        };
        let xml = build_at(&[product]);

        // No ".00" normalization and no RUR -> RUB translation here
        assert!(xml.contains("<price>199</price>"));
        assert!(xml.contains("<currencyId>RUR</currencyId>"));
        assert!(!xml.contains("RUB"));
    }

    #[test]
    fn test_all_pictures_emitted_in_order() {
        let mut product = make_product("sku-1", "Сувениры");
        product.pictures = vec![
            "https://cdn.example.com/1.jpg".to_string(),
            "https://cdn.example.com/2.jpg".to_string(),
            "https://cdn.example.com/3.jpg".to_string(),
        ];
        let xml = build_at(&[product]);

        assert_eq!(xml.matches("<picture>").count(), 3);
        let first = xml.find("1.jpg").unwrap();
        let second = xml.find("2.jpg").unwrap();
        let third = xml.find("3.jpg").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_offer_url() {
        let xml = build_at(&[make_product("sku-1", "Сувениры")]);
        assert!(xml.contains("<url>https://museum.yandex.ru/sku-1</url>"));
    }

    #[test]
    fn test_categories_block_precedes_offers() {
        let xml = build_at(&[make_product("sku-1", "Сувениры")]);
        assert!(xml.find("<categories>").unwrap() < xml.find("<offers>").unwrap());
    }

    #[test]
    fn test_build_is_deterministic_for_fixed_date() {
        let products = [make_product("a", "A"), make_product("b", "B")];
        assert_eq!(build_at(&products), build_at(&products));
    }

    #[test]
    fn test_build_stamps_a_date() {
        let xml = YandexFeed::build(&make_shop(), &[]).unwrap();
        let start = xml.find(r#"date=""#).expect("date attribute") + r#"date=""#.len();
        let date = &xml[start..start + xml[start..].find('"').unwrap()];
        assert!(!date.is_empty());
    }
}
