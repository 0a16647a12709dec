//! Fixtures
//!
//! The BioMarkt launch catalog, used by tests and demos.

use rust_decimal::Decimal;

use crate::products::{Catalog, Product, ProductId};

/// The four products of the storefront's launch catalog.
///
/// Prices are in minor-unit-exact decimals; the Elstar apples carry the
/// informational discount fields.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(vec![
        Product {
            id: ProductId::new(1),
            name: "Biologische Tomaten".to_string(),
            price: Decimal::new(349, 2),
            old_price: None,
            discount: None,
            unit: "kg".to_string(),
            origin: "Van Boer Janssen, Limburg".to_string(),
            emoji: "\u{1f345}".to_string(),
            category: "groenten".to_string(),
            in_stock: true,
        },
        Product {
            id: ProductId::new(2),
            name: "Elstar Appels".to_string(),
            price: Decimal::new(279, 2),
            old_price: Some(Decimal::new(349, 2)),
            discount: Some(20),
            unit: "kg".to_string(),
            origin: "Van Boomgaard De Hof, Zeeland".to_string(),
            emoji: "\u{1f34e}".to_string(),
            category: "fruit".to_string(),
            in_stock: true,
        },
        Product {
            id: ProductId::new(3),
            name: "Verse Volle Melk".to_string(),
            price: Decimal::new(189, 2),
            old_price: None,
            discount: None,
            unit: "liter".to_string(),
            origin: "Van Zuivelboerderij Het Groene Hart".to_string(),
            emoji: "\u{1f95b}".to_string(),
            category: "zuivel".to_string(),
            in_stock: true,
        },
        Product {
            id: ProductId::new(4),
            name: "Volkoren Desembrood".to_string(),
            price: Decimal::new(395, 2),
            old_price: None,
            discount: None,
            unit: "brood".to_string(),
            origin: "Van Bakkerij De Korenmolen".to_string(),
            emoji: "\u{1f35e}".to_string(),
            category: "brood".to_string(),
            in_stock: true,
        },
    ])
}
