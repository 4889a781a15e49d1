//! # lumi-core: Pure Business Logic for Lumi POS
//!
//! This crate is the **heart** of Lumi POS. It contains the business rules
//! for one checkout terminal as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Lumi POS Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  Frontend (TypeScript)                        │ │
//! │  │    Product Grid ──► Cart Panel ──► Table Board ──► Receipt   │ │
//! │  └──────────────────────────┬────────────────────────────────────┘ │
//! │                             │                                       │
//! │  ┌──────────────────────────▼────────────────────────────────────┐ │
//! │  │                  lumi-terminal (commands)                     │ │
//! │  │    add_to_cart, checkout, seat_table, reserve_table, ...      │ │
//! │  └──────────────────────────┬────────────────────────────────────┘ │
//! │                             │                                       │
//! │  ┌──────────────────────────▼────────────────────────────────────┐ │
//! │  │               ★ lumi-core (THIS CRATE) ★                      │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ │ │
//! │  │  │  types  │ │  money  │ │  cart   │ │  table  │ │validation│ │ │
//! │  │  │ Product │ │  Money  │ │  Cart   │ │FloorPlan│ │  rules  │ │ │
//! │  │  │ TaxRate │ │ bps math│ │ totals  │ │ seat/.. │ │  checks │ │ │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘ │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO CLOCK • NO GLOBALS • PURE FUNCTIONS             │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, TaxRate, PaymentMethod)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The order calculator for one checkout session
//! - [`table`] - The seating lifecycle state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every operation is deterministic; anything that
//!    needs the current time takes `now` as an argument
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//! 5. **Structural Invariants**: occupant data lives inside the status
//!    variant, so an available table cannot carry stale customer fields
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use lumi_core::cart::Cart;
//! use lumi_core::types::{Product, TaxRate};
//!
//! let espresso = Product {
//!     id: "b7e2c1d0-0000-4000-8000-000000000001".into(),
//!     name: "Espresso".into(),
//!     price_cents: 250,
//!     barcode: "12345678".into(),
//!     category: "beverages".into(),
//!     stock: 50,
//! };
//!
//! let now = Utc::now();
//! let mut cart = Cart::new(now);
//! cart.add_item(&espresso, now).unwrap();
//! cart.add_item(&espresso, now).unwrap();
//!
//! let totals = cart.totals(TaxRate::from_bps(800)); // 8%
//! assert_eq!(totals.subtotal_cents, 500);
//! assert_eq!(totals.total_cents, 540);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod table;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lumi_core::Money` instead of
// `use lumi_core::money::Money`

pub use cart::{Cart, CartItem, CartTotals, CheckoutSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use table::{FloorPlan, FloorSummary, Occupancy, Table, TableStatus};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default tax rate in basis points (800 = 8%), applied at checkout when
/// the terminal configuration does not override it.
pub const DEFAULT_TAX_RATE_BPS: u32 = 800;

/// Maximum unique lines allowed in a single cart.
///
/// Prevents runaway carts and keeps transaction sizes reasonable.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line in the cart.
///
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
