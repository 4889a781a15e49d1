//! # Lumi Terminal Library
//!
//! The session layer for one Lumi POS checkout terminal. The presentation
//! layer (a TypeScript UI) calls the command functions in [`commands`] and
//! renders the snapshots they return; all business rules live below in
//! `lumi-core`.
//!
//! ## Module Organization
//! ```text
//! lumi_terminal/
//! ├── lib.rs          ◄─── You are here
//! ├── catalog.rs      ◄─── In-memory product catalog + demo sample
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Catalog state wrapper
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── floor.rs    ◄─── Table board state
//! │   └── config.rs   ◄─── Terminal configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog search/lookup commands
//! │   ├── cart.rs     ◄─── Cart manipulation + checkout
//! │   └── table.rs    ◄─── Table lifecycle commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Example
//! ```rust
//! use lumi_terminal::catalog::sample_catalog;
//! use lumi_terminal::commands::{cart, product};
//! use lumi_terminal::state::{CartState, CatalogState, ConfigState};
//!
//! let catalog = CatalogState::from_catalog(sample_catalog());
//! let cart_state = CartState::new();
//! let config = ConfigState::default();
//!
//! let hits = product::search_products(&catalog, "banana").unwrap();
//! let response = cart::add_to_cart(&catalog, &cart_state, &config, &hits[0].id).unwrap();
//! assert_eq!(response.totals.subtotal_cents, 249);
//! ```

pub mod catalog;
pub mod commands;
pub mod error;
pub mod state;

pub use catalog::{sample_catalog, ProductCatalog};
pub use error::{ApiError, ErrorCode};
pub use state::{CartState, CatalogState, ConfigState, FloorState};
