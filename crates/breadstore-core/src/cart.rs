//! # Cart
//!
//! Cart lines, quantity management and pricing.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation                 Effect on lines                              │
//! │  ─────────                 ───────────────                              │
//! │  add(id, n)                existing line: qty += n  | else: push line   │
//! │  set_quantity(id, n)       n <= 0: remove           | else: qty = n     │
//! │  remove(id)                drop the line (no-op if absent)              │
//! │  clear()                   drop every line                              │
//! │                                                                         │
//! │  Derived on demand (never cached):                                      │
//! │  total_item_count = Σ qty                                               │
//! │  total_price      = Σ unit_price × qty        (exact integer rupiah)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id
//! - Every line has `1 <= quantity <= MAX_ITEM_QUANTITY`
//! - At most `MAX_CART_LINES` lines
//! - Every line's product id resolves in the cart's catalog
//!
//! A rejected operation leaves the cart exactly as it was.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_CART_LINES, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One product in the cart and how many of it.
///
/// The line refers to the product by id only; prices are read from the
/// catalog when totals are computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product_id: String,
    pub quantity: i64,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart of one session.
#[derive(Debug, Clone)]
pub struct Cart {
    catalog: Arc<Catalog>,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart that prices its lines from `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Cart {
            catalog,
            lines: Vec::new(),
        }
    }

    /// Adds `quantity` of a product, merging into its existing line.
    ///
    /// ## Errors
    /// - `Validation(MustBePositive)` when `quantity <= 0`
    /// - `ProductNotFound` when the id is not in the catalog
    /// - `QuantityTooLarge` when the line would exceed `MAX_ITEM_QUANTITY`
    /// - `CartTooLarge` when a new line would exceed `MAX_CART_LINES`
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use breadstore_core::{Cart, Catalog};
    ///
    /// let mut cart = Cart::new(Arc::new(Catalog::bakery()));
    /// cart.add("1", 2).unwrap();
    /// cart.add("1", 1).unwrap();
    /// assert_eq!(cart.line_count(), 1);
    /// assert_eq!(cart.quantity_of("1"), 3);
    /// ```
    pub fn add(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        if self.catalog.get(product_id).is_none() {
            return Err(CoreError::ProductNotFound(product_id.to_string()));
        }

        if let Some(line) = self.line_mut(product_id) {
            let merged = line.quantity.saturating_add(quantity);
            if merged > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: merged,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = merged;
            return Ok(());
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine {
            product_id: product_id.to_string(),
            quantity,
        });
        Ok(())
    }

    /// Removes a product's line. Returns the removed line, if there was one.
    pub fn remove(&mut self, product_id: &str) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.product_id == product_id)?;
        Some(self.lines.remove(index))
    }

    /// Sets a line's quantity exactly.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`Cart::remove`]
    /// - product not in cart: no-op
    /// - `quantity > MAX_ITEM_QUANTITY`: `QuantityTooLarge`, cart unchanged
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            self.remove(product_id);
            return Ok(());
        }

        let Some(line) = self.line_mut(product_id) else {
            return Ok(());
        };

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        line.quantity = quantity;
        Ok(())
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.line(product_id).is_some()
    }

    /// Quantity of a product in the cart, 0 if absent.
    pub fn quantity_of(&self, product_id: &str) -> i64 {
        self.line(product_id).map_or(0, |l| l.quantity)
    }

    /// Sum of all line quantities.
    pub fn total_item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of every line total.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(|l| self.line_total(l)).sum()
    }

    /// Unit price × quantity for one line.
    ///
    /// Lines only enter the cart after their product resolved in this same
    /// immutable catalog, so the lookup always succeeds for lines obtained
    /// from [`Cart::lines`]; a foreign line whose product is unknown prices
    /// at zero.
    pub fn line_total(&self, line: &CartLine) -> Money {
        self.catalog
            .get(&line.product_id)
            .map_or_else(Money::zero, |p| p.price * line.quantity)
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Lines paired with their products, for rendering and receipts.
    pub fn lines_with_products(&self) -> impl Iterator<Item = (&CartLine, &Product)> + '_ {
        self.lines
            .iter()
            .filter_map(|l| self.catalog.get(&l.product_id).map(|p| (l, p)))
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The catalog this cart prices from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }

    fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for responses and the cart badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Distinct products.
    pub line_count: usize,
    /// Sum of quantities (the badge number).
    pub item_count: i64,
    pub total_price: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            item_count: cart.total_item_count(),
            total_price: cart.total_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
