//! # State Module
//!
//! Session state for one terminal.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each
//! concern gets its own state type:
//!
//! 1. **Separation of Concerns**: each state type has one responsibility
//! 2. **Clearer Command Signatures**: commands declare exactly what they need
//! 3. **Reduced Contention**: independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      State Architecture                             │
//! │                                                                     │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────┐ ┌─────────────┐   │
//! │  │CatalogState │ │ CartState   │ │ FloorState  │ │ ConfigState │   │
//! │  │             │ │             │ │             │ │             │   │
//! │  │ Arc<Mutex<  │ │ Arc<Mutex<  │ │ Arc<Mutex<  │ │ store name  │   │
//! │  │  Product    │ │  Cart       │ │  FloorPlan  │ │ tax rate    │   │
//! │  │  Catalog>>  │ │ >>          │ │ >>          │ │ (read-only) │   │
//! │  └─────────────┘ └─────────────┘ └─────────────┘ └─────────────┘   │
//! │                                                                     │
//! │  THREAD SAFETY:                                                     │
//! │  • Mutable collections are behind Arc<Mutex<T>> for exclusive       │
//! │    access; operations are short, so a Mutex beats a RwLock          │
//! │  • ConfigState is read-only after initialization                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod floor;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::ConfigState;
pub use floor::FloorState;
