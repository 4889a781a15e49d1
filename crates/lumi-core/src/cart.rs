//! # Cart Module
//!
//! The order calculator for one checkout session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                │
//! │                                                                     │
//! │  Frontend Action          Operation              Cart Change        │
//! │  ───────────────          ─────────              ───────────        │
//! │  Click Product ─────────► add_item() ──────────► qty +1 / new line  │
//! │  Change Quantity ───────► set_quantity() ──────► qty = n (0 drops)  │
//! │  Click Remove ──────────► remove_item() ───────► line removed       │
//! │  Enter Discount ────────► set_discount_percent() validated, stored  │
//! │  View Totals ───────────► totals() ────────────► (read only)        │
//! │  Complete Sale ─────────► checkout() ──────────► snapshot + reset   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `product_id` (adding the same product bumps quantity)
//! - Every quantity is a positive integer (setting it to 0 drops the line)
//! - At most `MAX_CART_ITEMS` lines, at most `MAX_ITEM_QUANTITY` per line

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, TaxRate};
use crate::validation;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
///
/// ## Price Freezing
/// The line carries a snapshot of the product taken when it was added.
/// If the catalog price changes afterwards, the line keeps the price the
/// customer saw.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Product ID (UUID)
    pub product_id: String,

    /// Product name at time of adding (frozen)
    pub name: String,

    /// Barcode at time of adding (frozen)
    pub barcode: String,

    /// Price in cents at time of adding (frozen)
    pub unit_price_cents: i64,

    /// Quantity in cart (always > 0)
    pub quantity: i64,

    /// When this line was first added
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    fn from_product(product: &Product, now: DateTime<Utc>) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            barcode: product.barcode.clone(),
            unit_price_cents: product.price_cents,
            quantity: 1,
            added_at: now,
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The cart for one checkout session.
///
/// Created empty at session start, mutated by the operations below, and
/// reset by [`Cart::checkout`] or [`Cart::clear`]. The cart never touches
/// a clock itself; callers pass `now` in.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub items: Vec<CartItem>,

    /// Discount applied to the subtotal, in basis points (1000 = 10%).
    pub discount_bps: u32,

    /// When the cart was created or last reset.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new(now: DateTime<Utc>) -> Self {
        Cart {
            items: Vec::new(),
            discount_bps: 0,
            created_at: now,
        }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by 1
    /// - Product not in cart: appended as a new line with quantity 1
    /// - Stock is not checked; `Product::stock` is display-only
    pub fn add_item(&mut self, product: &Product, now: DateTime<Utc>) -> CoreResult<()> {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_qty = item.quantity + 1;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(CartItem::from_product(product, now));
        Ok(())
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - Quantity ≤ 0: removes the line (no-op when the product is absent,
    ///   matching [`Cart::remove_item`])
    /// - Quantity > 0 on a missing product: `ProductNotFound`
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            self.remove_item(product_id);
            return Ok(());
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
            Ok(())
        } else {
            Err(CoreError::ProductNotFound(product_id.to_string()))
        }
    }

    /// Removes a line by product ID. Silently does nothing if absent.
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Sets the discount percentage for this cart.
    ///
    /// Values outside [0, 100] are rejected, never clamped.
    pub fn set_discount_percent(&mut self, percent: f64) -> CoreResult<()> {
        validation::validate_discount_percent(percent)?;
        self.discount_bps = (percent * 100.0).round() as u32;
        Ok(())
    }

    /// Returns the discount as a percentage (for display).
    pub fn discount_percent(&self) -> f64 {
        self.discount_bps as f64 / 100.0
    }

    /// Returns the number of unique lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Calculates the subtotal (before discount and tax).
    ///
    /// An exact integer-cent sum; no rounding happens here.
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.items.iter().map(|i| i.line_total_cents()).sum())
    }

    /// Derives all monetary totals for the cart.
    ///
    /// ```text
    /// subtotal            = Σ unit_price × quantity          (exact)
    /// discount            = subtotal × discount_bps          (rounded once)
    /// discounted subtotal = subtotal − discount              (exact)
    /// tax                 = discounted subtotal × tax rate   (rounded once)
    /// total               = discounted subtotal + tax        (exact)
    /// ```
    ///
    /// Pure and idempotent: calling it twice without mutating the cart
    /// yields identical results.
    pub fn totals(&self, tax_rate: TaxRate) -> CartTotals {
        let subtotal = self.subtotal();
        let discount = subtotal.percentage_of(self.discount_bps);
        let discounted_subtotal = subtotal - discount;
        let tax = discounted_subtotal.calculate_tax(tax_rate);
        let total = discounted_subtotal + tax;

        CartTotals {
            item_count: self.item_count(),
            total_quantity: self.total_quantity(),
            subtotal_cents: subtotal.cents(),
            discount_bps: self.discount_bps,
            discount_cents: discount.cents(),
            discounted_subtotal_cents: discounted_subtotal.cents(),
            tax_cents: tax.cents(),
            total_cents: total.cents(),
        }
    }

    /// Finalizes the session: returns a snapshot of the lines and totals
    /// for the payment/receipt collaborator, then resets the cart (lines
    /// emptied, discount back to 0).
    ///
    /// Performs no I/O; persisting the transaction is the caller's job.
    pub fn checkout(&mut self, tax_rate: TaxRate, now: DateTime<Utc>) -> CheckoutSummary {
        let totals = self.totals(tax_rate);
        let items = std::mem::take(&mut self.items);
        self.discount_bps = 0;
        self.created_at = now;

        CheckoutSummary { items, totals }
    }

    /// Empties the cart and resets the discount without finalizing.
    pub fn clear(&mut self, now: DateTime<Utc>) {
        self.items.clear();
        self.discount_bps = 0;
        self.created_at = now;
    }
}

// =============================================================================
// Derived Values
// =============================================================================

/// Monetary totals derived from a cart. See [`Cart::totals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub discount_bps: u32,
    pub discount_cents: i64,
    pub discounted_subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

/// The outcome of [`Cart::checkout`]: the finalized lines and their totals,
/// handed to the payment/receipt flow.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutSummary {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

// =============================================================================
// Unit Tests
// =============================================================================
