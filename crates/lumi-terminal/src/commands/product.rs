//! # Product Commands
//!
//! Catalog search and retrieval for the product grid.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;
use lumi_core::types::Product;

/// Product DTO (Data Transfer Object) for the frontend.
///
/// Decouples the internal domain model from the API contract and renames
/// fields to camelCase for JS consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub barcode: String,
    pub category: String,
    /// Display-only; the cart does not enforce it.
    pub stock: i64,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id.clone(),
            name: p.name.clone(),
            price_cents: p.price_cents,
            barcode: p.barcode.clone(),
            category: p.category.clone(),
            stock: p.stock,
        }
    }
}

/// Searches the catalog by name substring or exact barcode.
///
/// An empty query returns the full catalog (the grid's default view).
pub fn search_products(
    catalog: &CatalogState,
    query: &str,
) -> Result<Vec<ProductDto>, ApiError> {
    debug!(query = %query, "search_products command");

    if query.len() > 100 {
        return Err(ApiError::validation("query must be at most 100 characters"));
    }

    Ok(catalog.with_catalog(|c| c.search(query).into_iter().map(ProductDto::from).collect()))
}

/// Fetches one product by id.
pub fn get_product_by_id(catalog: &CatalogState, id: &str) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "get_product_by_id command");

    catalog
        .with_catalog(|c| c.get(id).map(ProductDto::from))
        .ok_or_else(|| ApiError::not_found("Product", id))
}

/// Fetches one product by exact barcode (scanner path).
pub fn get_product_by_barcode(
    catalog: &CatalogState,
    barcode: &str,
) -> Result<ProductDto, ApiError> {
    debug!(barcode = %barcode, "get_product_by_barcode command");

    catalog
        .with_catalog(|c| c.get_by_barcode(barcode).map(ProductDto::from))
        .ok_or_else(|| ApiError::not_found("Product", barcode))
}

/// Lists the distinct categories for the filter row.
pub fn list_categories(catalog: &CatalogState) -> Vec<String> {
    debug!("list_categories command");
    catalog.with_catalog(|c| c.categories())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::error::ErrorCode;

    fn state() -> CatalogState {
        CatalogState::from_catalog(sample_catalog())
    }

    #[test]
    fn test_search_by_name() {
        let catalog = state();
        let hits = search_products(&catalog, "milk").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Milk 1L");
    }

    #[test]
    fn test_search_rejects_oversized_query() {
        let catalog = state();
        let err = search_products(&catalog, &"x".repeat(200)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_get_by_id_not_found() {
        let catalog = state();
        let err = get_product_by_id(&catalog, "ghost").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_get_by_barcode() {
        let catalog = state();
        let dto = get_product_by_barcode(&catalog, "1234567890126").unwrap();
        assert_eq!(dto.name, "Bread Loaf");
        assert_eq!(dto.price_cents, 299);
    }

    #[test]
    fn test_list_categories() {
        let catalog = state();
        assert_eq!(list_categories(&catalog).len(), 5);
    }
}
