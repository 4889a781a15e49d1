//! # Catalog State
//!
//! The product catalog behind the same `Arc<Mutex<T>>` pattern as the
//! cart. Lookups are cheap and catalog edits are rare, but keeping one
//! locking story across the session state keeps the commands uniform.

use std::sync::{Arc, Mutex};

use crate::catalog::ProductCatalog;

/// Session-owned catalog state.
#[derive(Debug)]
pub struct CatalogState {
    catalog: Arc<Mutex<ProductCatalog>>,
}

impl CatalogState {
    /// Creates state around an empty catalog.
    pub fn new() -> Self {
        Self::from_catalog(ProductCatalog::new())
    }

    /// Creates state around a pre-built catalog (e.g. the demo sample).
    pub fn from_catalog(catalog: ProductCatalog) -> Self {
        CatalogState {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Executes a function with read access to the catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ProductCatalog) -> R,
    {
        let catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ProductCatalog) -> R,
    {
        let mut catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&mut catalog)
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;

    #[test]
    fn test_catalog_state_round_trip() {
        let state = CatalogState::from_catalog(sample_catalog());
        assert_eq!(state.with_catalog(|c| c.len()), 6);
    }
}
