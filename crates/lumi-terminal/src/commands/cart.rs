//! # Cart Commands
//!
//! Cart manipulation and checkout.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Cart Lifecycle                               │
//! │                                                                     │
//! │  ┌─────────┐      ┌──────────┐      ┌──────────┐     ┌──────────┐   │
//! │  │  Empty  │─────►│ In Cart  │─────►│  Tender  │────►│ Receipt  │   │
//! │  │  Cart   │      │          │      │  Chosen  │     │          │   │
//! │  └─────────┘      └──────────┘      └──────────┘     └──────────┘   │
//! │                        │                  │                         │
//! │                   add_to_cart         checkout                      │
//! │                   update_cart_item        │                         │
//! │                   remove_from_cart        ▼                         │
//! │                   set_cart_discount  (cart resets to empty)         │
//! │                        │                                            │
//! │                        ▼                                            │
//! │                   clear_cart ─────────────────► (back to empty)     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState};
use lumi_core::cart::{Cart, CartItem, CartTotals};
use lumi_core::types::PaymentMethod;
use lumi_core::CoreError;

// =============================================================================
// DTOs
// =============================================================================

/// One cart line as the frontend sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDto {
    pub product_id: String,
    pub name: String,
    pub barcode: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub line_total_cents: i64,
}

impl From<&CartItem> for CartLineDto {
    fn from(item: &CartItem) -> Self {
        CartLineDto {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            barcode: item.barcode.clone(),
            unit_price_cents: item.unit_price_cents,
            quantity: item.quantity,
            line_total_cents: item.line_total_cents(),
        }
    }
}

/// Derived totals as the frontend sees them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotalsDto {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub discount_percent: f64,
    pub discount_cents: i64,
    pub discounted_subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

impl From<CartTotals> for CartTotalsDto {
    fn from(t: CartTotals) -> Self {
        CartTotalsDto {
            item_count: t.item_count,
            total_quantity: t.total_quantity,
            subtotal_cents: t.subtotal_cents,
            discount_percent: t.discount_bps as f64 / 100.0,
            discount_cents: t.discount_cents,
            discounted_subtotal_cents: t.discounted_subtotal_cents,
            tax_cents: t.tax_cents,
            total_cents: t.total_cents,
        }
    }
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineDto>,
    pub totals: CartTotalsDto,
}

fn cart_snapshot(cart: &Cart, config: &ConfigState) -> CartResponse {
    CartResponse {
        items: cart.items.iter().map(CartLineDto::from).collect(),
        totals: cart.totals(config.tax_rate()).into(),
    }
}

/// Receipt handed to the payment/receipt flow after checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    pub receipt_number: String,
    pub store_name: String,
    pub cashier_name: String,
    pub timestamp: String,
    pub items: Vec<CartLineDto>,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub payment_method: PaymentMethod,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current cart contents and totals.
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| cart_snapshot(c, config))
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases
/// - Product not in cart: added as a new line
/// - Price is frozen at time of adding (won't change if the catalog
///   price updates)
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    config: &ConfigState,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog
        .with_catalog(|c| c.get(product_id).cloned())
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    let response = cart.with_cart_mut(|c| {
        c.add_item(&product, Utc::now())?;
        Ok::<CartResponse, CoreError>(cart_snapshot(c, config))
    })?;

    info!(product_id = %product_id, name = %product.name, "product added to cart");
    Ok(response)
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity ≤ 0: removes the line
/// - Quantity > max: returns error
pub fn update_cart_item(
    cart: &CartState,
    config: &ConfigState,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    let response = cart.with_cart_mut(|c| {
        c.set_quantity(product_id, quantity)?;
        Ok::<CartResponse, CoreError>(cart_snapshot(c, config))
    })?;

    Ok(response)
}

/// Removes a line from the cart. A no-op when the product is absent.
pub fn remove_from_cart(
    cart: &CartState,
    config: &ConfigState,
    product_id: &str,
) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_item(product_id);
        cart_snapshot(c, config)
    })
}

/// Sets the cart-level discount percentage.
///
/// Values outside [0, 100] are rejected with a validation error.
pub fn set_cart_discount(
    cart: &CartState,
    config: &ConfigState,
    percent: f64,
) -> Result<CartResponse, ApiError> {
    debug!(percent = %percent, "set_cart_discount command");

    let response = cart.with_cart_mut(|c| {
        c.set_discount_percent(percent)?;
        Ok::<CartResponse, CoreError>(cart_snapshot(c, config))
    })?;

    info!(percent = %percent, "cart discount set");
    Ok(response)
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - User cancels the sale
/// - "Clear Cart" button
pub fn clear_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear(Utc::now());
        cart_snapshot(c, config)
    })
}

/// Finalizes the sale: snapshots the cart, resets it, and returns the
/// receipt for the payment/receipt flow.
///
/// Performs no payment processing and no persistence; the caller owns
/// both.
pub fn checkout(
    cart: &CartState,
    config: &ConfigState,
    payment_method: PaymentMethod,
    customer_name: Option<String>,
    customer_phone: Option<String>,
) -> Result<ReceiptResponse, ApiError> {
    debug!(method = ?payment_method, "checkout command");

    if cart.with_cart(|c| c.is_empty()) {
        return Err(ApiError::validation("Cart is empty"));
    }

    let now = Utc::now();
    let summary = cart.with_cart_mut(|c| c.checkout(config.tax_rate(), now));
    let receipt_number = generate_receipt_number();

    info!(
        receipt_number = %receipt_number,
        total = %summary.totals.total_cents,
        items = summary.items.len(),
        "sale completed"
    );

    Ok(ReceiptResponse {
        receipt_number,
        store_name: config.store_name.clone(),
        cashier_name: config.cashier_name.clone(),
        timestamp: now.to_rfc3339(),
        items: summary.items.iter().map(CartLineDto::from).collect(),
        subtotal_cents: summary.totals.subtotal_cents,
        discount_cents: summary.totals.discount_cents,
        tax_cents: summary.totals.tax_cents,
        total_cents: summary.totals.total_cents,
        payment_method,
        customer_name,
        customer_phone,
    })
}

fn generate_receipt_number() -> String {
    let now = Utc::now();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    let random: u16 = (nanos % 10000) as u16;
    format!("{}-{:04}", now.format("%y%m%d-%H%M%S"), random)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::error::ErrorCode;

    fn fixture() -> (CatalogState, CartState, ConfigState) {
        (
            CatalogState::from_catalog(sample_catalog()),
            CartState::new(),
            ConfigState::default(),
        )
    }

    fn id_of(catalog: &CatalogState, barcode: &str) -> String {
        catalog.with_catalog(|c| c.get_by_barcode(barcode).unwrap().id.clone())
    }

    #[test]
    fn test_add_to_cart_unknown_product() {
        let (catalog, cart, config) = fixture();
        let err = add_to_cart(&catalog, &cart, &config, "ghost").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_add_and_update_flow() {
        let (catalog, cart, config) = fixture();
        let cola = id_of(&catalog, "1234567890125"); // $3.99

        let response = add_to_cart(&catalog, &cart, &config, &cola).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.totals.subtotal_cents, 399);

        let response = update_cart_item(&cart, &config, &cola, 3).unwrap();
        assert_eq!(response.totals.subtotal_cents, 1197);
        assert_eq!(response.items[0].line_total_cents, 1197);

        let response = update_cart_item(&cart, &config, &cola, 0).unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_update_missing_product_errors() {
        let (_, cart, config) = fixture();
        let err = update_cart_item(&cart, &config, "ghost", 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let (_, cart, config) = fixture();
        let response = remove_from_cart(&cart, &config, "ghost");
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_discount_bounds() {
        let (_, cart, config) = fixture();
        assert!(set_cart_discount(&cart, &config, 10.0).is_ok());

        let err = set_cart_discount(&cart, &config, 150.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_checkout_empty_cart_rejected() {
        let (_, cart, config) = fixture();
        let err = checkout(&cart, &config, PaymentMethod::Cash, None, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_checkout_produces_receipt_and_resets_cart() {
        let (catalog, cart, config) = fixture();
        let bananas = id_of(&catalog, "1234567890124"); // $2.49
        add_to_cart(&catalog, &cart, &config, &bananas).unwrap();
        update_cart_item(&cart, &config, &bananas, 2).unwrap();
        set_cart_discount(&cart, &config, 10.0).unwrap();

        let receipt = checkout(
            &cart,
            &config,
            PaymentMethod::Card,
            Some("John Smith".into()),
            None,
        )
        .unwrap();

        // 498 - 50 (10%, rounded) = 448; tax 8% = 36; total 484
        assert_eq!(receipt.subtotal_cents, 498);
        assert_eq!(receipt.discount_cents, 50);
        assert_eq!(receipt.tax_cents, 36);
        assert_eq!(receipt.total_cents, 484);
        assert_eq!(receipt.payment_method, PaymentMethod::Card);
        assert_eq!(receipt.store_name, "LumiMart");
        assert_eq!(receipt.items.len(), 1);

        // Cart is reset for the next customer
        let after = get_cart(&cart, &config);
        assert!(after.items.is_empty());
        assert_eq!(after.totals.discount_percent, 0.0);
    }

    #[test]
    fn test_totals_reference_scenario_through_commands() {
        let (catalog, cart, config) = fixture();

        // Build $25.00 worth of lines: needs exact prices, so insert two
        // purpose-made products.
        catalog.with_catalog_mut(|c| {
            c.insert(lumi_core::types::Product {
                id: "p-ten".into(),
                name: "Ten Dollar Item".into(),
                price_cents: 1000,
                barcode: "90000000001".into(),
                category: "grocery".into(),
                stock: 5,
            })
            .unwrap();
            c.insert(lumi_core::types::Product {
                id: "p-five".into(),
                name: "Five Dollar Item".into(),
                price_cents: 500,
                barcode: "90000000002".into(),
                category: "grocery".into(),
                stock: 5,
            })
            .unwrap();
        });

        add_to_cart(&catalog, &cart, &config, "p-ten").unwrap();
        update_cart_item(&cart, &config, "p-ten", 2).unwrap();
        add_to_cart(&catalog, &cart, &config, "p-five").unwrap();
        let response = set_cart_discount(&cart, &config, 10.0).unwrap();

        assert_eq!(response.totals.subtotal_cents, 2500);
        assert_eq!(response.totals.discount_cents, 250);
        assert_eq!(response.totals.discounted_subtotal_cents, 2250);
        assert_eq!(response.totals.tax_cents, 180);
        assert_eq!(response.totals.total_cents, 2430);
    }
}
