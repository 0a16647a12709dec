//! Summary

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};

use crate::{
    cart::{Cart, CartLine},
    products::ProductId,
};

/// Read-only view of a single cart line, as handed to the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSummary {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Sales unit the price refers to
    pub unit: String,

    /// Display glyph
    pub emoji: String,

    /// Requested quantity
    pub quantity: u32,

    /// Line subtotal: unit price times quantity, exact
    pub subtotal: Decimal,
}

impl From<&CartLine> for LineSummary {
    fn from(line: &CartLine) -> Self {
        let product = line.product();

        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            unit: product.unit.clone(),
            emoji: product.emoji.clone(),
            quantity: line.quantity(),
            subtotal: line.subtotal(),
        }
    }
}

/// Derived totals and line views for the whole cart.
///
/// Always re-derived from the full line sequence rather than patched
/// incrementally, so the displayed state can never drift from the stored
/// state. Totals are accumulated exactly and rounded only at display time.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    total_items: u64,
    total: Decimal,
    lines: Vec<LineSummary>,
}

impl CartSummary {
    /// Derive a summary from the current cart contents.
    #[must_use]
    pub fn of(cart: &Cart) -> Self {
        let total_items = cart.iter().map(|line| u64::from(line.quantity())).sum();
        let total = cart.iter().map(CartLine::subtotal).sum();
        let lines = cart.iter().map(LineSummary::from).collect();

        Self {
            total_items,
            total,
            lines,
        }
    }

    /// Total item count: the sum of all line quantities, not the line count.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Exact total price: the sum of unit price times quantity over all lines.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// The ordered line views.
    pub fn lines(&self) -> &[LineSummary] {
        &self.lines
    }

    /// Check if the summarized cart was empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Format the total in the given display currency.
    ///
    /// Rounds the exact total to the currency's minor-unit exponent at this
    /// point only, then renders it with the currency's own formatting rules.
    pub fn formatted_total(&self, currency: &'static Currency) -> String {
        let rounded = self.total.round_dp_with_strategy(
            currency.exponent,
            RoundingStrategy::MidpointAwayFromZero,
        );

        Money::from_decimal(rounded, currency).to_string()
    }
}
