//! # Scripted Demo Walkthrough
//!
//! Seeds the sample floor plan and catalog, then drives one evening of
//! terminal activity end to end: reservation, seating, order entry, a
//! discounted checkout, and the cleaning cycle.
//!
//! ## Usage
//! ```bash
//! cargo run -p lumi-terminal --bin demo
//!
//! # With command logging
//! RUST_LOG=debug cargo run -p lumi-terminal --bin demo
//!
//! # Print the final receipt as JSON instead of text
//! cargo run -p lumi-terminal --bin demo -- --json
//! ```

use chrono::{Duration, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lumi_core::types::PaymentMethod;
use lumi_terminal::catalog::sample_catalog;
use lumi_terminal::commands::{cart, product, table};
use lumi_terminal::state::{CartState, CatalogState, ConfigState, FloorState};

/// The demo floor: eight tables with the capacities of the sample board.
const TABLE_CAPACITIES: [u32; 8] = [2, 4, 6, 2, 4, 8, 2, 4];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let json_receipt = std::env::args().any(|a| a == "--json");

    println!("Lumi POS Demo Terminal");
    println!("======================");

    // ------------------------------------------------------------------
    // Seed
    // ------------------------------------------------------------------
    let catalog = CatalogState::from_catalog(sample_catalog());
    let floor = FloorState::new();
    let config = ConfigState::from_env();
    let cart_state = CartState::new();

    let mut table_ids = Vec::new();
    for (i, capacity) in TABLE_CAPACITIES.iter().enumerate() {
        let response = table::add_table(&floor, (i + 1) as u32, *capacity)?;
        table_ids = response.tables.iter().map(|t| t.id.clone()).collect();
    }

    println!(
        "✓ Seeded {} products, {} tables",
        catalog.with_catalog(|c| c.len()),
        table_ids.len()
    );

    // ------------------------------------------------------------------
    // Floor activity
    // ------------------------------------------------------------------
    info!("reserving table 3 for Sarah Johnson");
    table::reserve_table(
        &floor,
        &table_ids[2],
        "Sarah Johnson",
        Utc::now() + Duration::minutes(30),
    )?;

    info!("seating walk-in at table 1");
    table::seat_table(
        &floor,
        &table_ids[0],
        Some("John Smith".to_string()),
        Some("Alice".to_string()),
    )?;

    let order_key = table::start_table_order(&floor, &table_ids[0])?;
    info!(table_id = %order_key, "order entry under way");
    table::record_table_order_total(&floor, &order_key, 4550)?;

    let board = table::list_tables(&floor);
    println!();
    println!("Floor board:");
    for t in &board.tables {
        println!(
            "  Table {:>2} ({} seats)  {:?}{}{}",
            t.number,
            t.capacity,
            t.status,
            t.customer_name
                .as_deref()
                .map(|n| format!("  {}", n))
                .unwrap_or_default(),
            t.elapsed_label
                .as_deref()
                .map(|l| format!("  [{}]", l))
                .unwrap_or_default(),
        );
    }
    println!(
        "  Summary: {} available / {} occupied / {} reserved / {} cleaning",
        board.summary.available,
        board.summary.occupied,
        board.summary.reserved,
        board.summary.cleaning
    );

    // ------------------------------------------------------------------
    // Register sale
    // ------------------------------------------------------------------
    println!();
    println!("Ringing up a sale...");

    let bananas = product::get_product_by_barcode(&catalog, "1234567890124")?;
    let cola = product::search_products(&catalog, "cola")?
        .into_iter()
        .next()
        .expect("demo catalog has a cola");

    cart::add_to_cart(&catalog, &cart_state, &config, &bananas.id)?;
    cart::update_cart_item(&cart_state, &config, &bananas.id, 3)?;
    cart::add_to_cart(&catalog, &cart_state, &config, &cola.id)?;
    let response = cart::set_cart_discount(&cart_state, &config, 10.0)?;

    println!(
        "  {} lines, subtotal {}, total {}",
        response.totals.item_count,
        config.format_currency(response.totals.subtotal_cents),
        config.format_currency(response.totals.total_cents)
    );

    let receipt = cart::checkout(
        &cart_state,
        &config,
        PaymentMethod::Cash,
        Some("John Smith".to_string()),
        None,
    )?;

    println!();
    if json_receipt {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    } else {
        print_receipt(&config, &receipt);
    }

    // ------------------------------------------------------------------
    // Close out the table
    // ------------------------------------------------------------------
    table::checkout_table(&floor, &table_ids[0])?;
    table::seat_table(&floor, &table_ids[3], None, None)?;
    table::mark_table_cleaning(&floor, &table_ids[3])?;
    table::mark_table_clean(&floor, &table_ids[3])?;

    let summary = table::list_tables(&floor).summary;
    println!();
    println!(
        "✓ End of demo: {} available / {} occupied / {} reserved / {} cleaning",
        summary.available, summary.occupied, summary.reserved, summary.cleaning
    );

    Ok(())
}

fn print_receipt(config: &ConfigState, receipt: &cart::ReceiptResponse) {
    println!("----------------------------------------");
    println!("  {}", receipt.store_name);
    println!("  Receipt {}", receipt.receipt_number);
    println!("  Cashier: {}", receipt.cashier_name);
    println!("----------------------------------------");
    for item in &receipt.items {
        println!(
            "  {:<24} x{:<3} {:>8}",
            item.name,
            item.quantity,
            config.format_currency(item.line_total_cents)
        );
    }
    println!("----------------------------------------");
    println!(
        "  Subtotal {:>29}",
        config.format_currency(receipt.subtotal_cents)
    );
    println!(
        "  Discount {:>29}",
        config.format_currency(-receipt.discount_cents)
    );
    println!("  Tax {:>34}", config.format_currency(receipt.tax_cents));
    println!("  TOTAL {:>32}", config.format_currency(receipt.total_cents));
    println!("  Paid by {:?}", receipt.payment_method);
    println!("----------------------------------------");
}

/// Initializes the tracing subscriber for structured logging.
///
/// Default: INFO level, overridable with `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
