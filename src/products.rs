//! Products

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create a new product id from its raw positive integer value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw integer value of this id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
///
/// An immutable catalog record. Prices are currency-agnostic unit amounts;
/// the storefront decides the display currency. `old_price` and `discount`
/// are informational display fields and are never consulted when pricing a
/// cart, and `in_stock` is not enforced by cart operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Previous unit price, present only when a discount applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Decimal>,

    /// Informational discount percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,

    /// Sales unit the price refers to (e.g. "kg", "liter")
    pub unit: String,

    /// Provenance line shown on the product card
    pub origin: String,

    /// Display glyph used as the item image placeholder
    pub emoji: String,

    /// Category grouping tag
    pub category: String,

    /// Availability flag
    pub in_stock: bool,
}

/// Catalog
///
/// The static, read-only list of purchasable products supplied at startup.
/// Lookup is strictly by product id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a list of products.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by its id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Iterate over the products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Get the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
