//! Cart

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::products::{Product, ProductId};

/// One product entry in the cart plus its requested quantity.
///
/// A line carries a full copy of the product so a persisted cart can be
/// rendered without re-joining against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    product: Product,
    quantity: u32,
}

impl CartLine {
    /// Create a new line for a product with the given quantity.
    #[must_use]
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// The product this line refers to.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The requested quantity. Always at least 1 for a line held by a [`Cart`].
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Line subtotal: unit price times quantity, exact.
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Cart
///
/// An insertion-ordered sequence of [`CartLine`]s: the first-added product
/// stays first. Holds at most one line per product id, and every held line
/// has a quantity of at least 1. This type is a pure state machine;
/// persistence and change notification live in
/// [`CartManager`](crate::manager::CartManager).
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: SmallVec<[CartLine; 8]>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a cart from previously persisted lines.
    ///
    /// Restoration normalizes defensively: lines with quantity 0 are
    /// dropped, and when a product id occurs more than once the first
    /// occurrence keeps its position and the quantities are summed. A stale
    /// or hand-edited snapshot can therefore never violate the cart
    /// invariants.
    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();

        for line in lines {
            if line.quantity == 0 {
                continue;
            }

            match cart.line_mut(line.product.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }

        cart
    }

    /// Add one of the given product to the cart.
    ///
    /// Increments the quantity of an existing line for the same product id,
    /// otherwise appends a new line with quantity 1 at the end of the
    /// sequence. Always succeeds.
    pub fn add(&mut self, product: &Product) {
        match self.line_mut(product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::new(product.clone(), 1)),
        }
    }

    /// Remove the line matching the given product id.
    ///
    /// A no-op when no line matches; removals are idempotent.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product.id != id);
    }

    /// Set the quantity of the line matching the given product id.
    ///
    /// A quantity of zero or less removes the line entirely; a line is
    /// never stored at quantity 0. A positive quantity replaces the line's
    /// quantity exactly. A no-op when no line matches.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        if self.line_mut(id).is_none() {
            return;
        }

        if quantity <= 0 {
            self.remove(id);
        } else if let Some(line) = self.line_mut(id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product.id == id)
    }
}
