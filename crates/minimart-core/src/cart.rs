//! # Cart State Machine
//!
//! The server-held cart: one ordered line list, merged by product id.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  API Request              Core Operation          Cart State Change     │
//! │  ───────────              ──────────────          ─────────────────     │
//! │                                                                         │
//! │  POST /api/cart ─────────► add_or_update() ─────► merge or append       │
//! │                                                                         │
//! │  DELETE /api/cart/:id ───► remove_line() ───────► line removed          │
//! │                                                                         │
//! │  GET /api/cart ──────────► lines() / total() ───► (read only)           │
//! │                                                                         │
//! │  POST /api/checkout ─────► clear() ─────────────► cart emptied          │
//! │                                                                         │
//! │  Invariants after every operation:                                      │
//! │    • at most one line per product id                                    │
//! │    • every line has qty > 0                                             │
//! │    • insertion order preserved; new lines append at the end             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_adjustment, MAX_LINE_QTY};

// =============================================================================
// Cart Line
// =============================================================================

/// One product's presence in the cart.
///
/// ## Design Notes
/// - `id` references a catalog product
/// - `name` and `price` are frozen copies taken when the line is created;
///   the cart displays consistent data even if the catalog changed later
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product id this line refers to.
    pub id: i64,

    /// Product name at time of insertion (frozen).
    pub name: String,

    /// Unit price in minor units at time of insertion (frozen).
    #[serde(rename = "price")]
    pub price_cents: i64,

    /// Quantity in cart. Never zero or negative while the line exists.
    pub qty: i64,
}

impl CartLine {
    /// Creates a new cart line from a product and quantity.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the product price changes
    /// later, this line retains the original price.
    pub fn from_product(product: &Product, qty: i64) -> Self {
        CartLine {
            id: product.id,
            name: product.name.clone(),
            price_cents: product.price_cents,
            qty,
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.price_cents).multiply_quantity(self.qty)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `id` (adding the same product merges quantities)
/// - A line's quantity is always > 0 (a merge that lands at or below zero
///   removes the line)
/// - Insertion order is preserved for display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Returns the cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds a quantity adjustment for a product, merging with any existing
    /// line.
    ///
    /// ## Behavior
    /// - `qty == 0` is rejected: "do nothing" is not "remove", which is a
    ///   separate operation
    /// - unknown `product_id` → [`CoreError::ProductNotFound`]
    /// - existing line: quantity incremented by `qty` (negative effects a
    ///   partial removal); a result at or below zero deletes the line —
    ///   the boundary check is `<= 0`, a floor, so an over-subtraction
    ///   never leaves a negative quantity behind. A merge that would push
    ///   the line past [`MAX_LINE_QTY`] is rejected and the line stays as
    ///   it was.
    /// - no existing line: a new line is appended only when `qty > 0`;
    ///   a first-time non-positive adjustment is a silent no-op
    ///
    /// New lines snapshot the product's current name and price. The caller
    /// is responsible for persisting the cart afterwards.
    pub fn add_or_update(
        &mut self,
        catalog: &Catalog,
        product_id: i64,
        qty: i64,
    ) -> CoreResult<()> {
        validate_adjustment(qty)?;

        let product = catalog
            .find(product_id)
            .ok_or(CoreError::ProductNotFound(product_id))?;

        if let Some(pos) = self.lines.iter().position(|l| l.id == product_id) {
            // checked_add: a persisted line is not re-validated on load,
            // so its qty cannot be assumed small enough for a plain add
            let new_qty = self.lines[pos]
                .qty
                .checked_add(qty)
                .filter(|q| *q <= MAX_LINE_QTY)
                .ok_or_else(|| CoreError::invalid("qty out of range"))?;
            if new_qty <= 0 {
                self.lines.remove(pos);
            } else {
                self.lines[pos].qty = new_qty;
            }
        } else if qty > 0 {
            self.lines.push(CartLine::from_product(product, qty));
        }

        Ok(())
    }

    /// Removes the line for a product id, preserving the order of the rest.
    ///
    /// ## Errors
    /// [`CoreError::ItemNotFound`] if no line matches; the cart is
    /// unchanged in that case.
    pub fn remove_line(&mut self, product_id: i64) -> CoreResult<()> {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.id != product_id);

        if self.lines.len() == initial_len {
            Err(CoreError::ItemNotFound(product_id))
        } else {
            Ok(())
        }
    }

    /// Calculates the cart total: Σ price × qty over all lines.
    ///
    /// Pure read; an empty cart totals zero.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
