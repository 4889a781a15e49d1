//! # Cart State
//!
//! The current cart, shared across command invocations.
//!
//! The cart is wrapped in `Arc<Mutex<T>>`: several commands may touch the
//! cart during a session, and only one should modify it at a time. Write
//! operations hold the lock for the duration of one core call.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use lumi_core::cart::Cart;

/// Session-owned cart state.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new(Utc::now()))),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| cart.totals(tax_rate));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&product, Utc::now()))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_state_round_trip() {
        let state = CartState::new();
        assert!(state.with_cart(|c| c.is_empty()));

        state.with_cart_mut(|c| c.set_discount_percent(5.0)).unwrap();
        assert_eq!(state.with_cart(|c| c.discount_bps), 500);
    }
}
