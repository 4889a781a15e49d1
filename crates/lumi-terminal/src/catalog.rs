//! # Product Catalog
//!
//! In-memory product lookup for one terminal.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  User types "1234567890125"                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌────────────────────────────────────────────┐                     │
//! │  │  Is the query a barcode? (8-13 digits)     │                     │
//! │  │  YES: exact barcode lookup                 │──► Found? Return [1]│
//! │  │  NO:  case-insensitive name substring      │                     │
//! │  └────────────────────────────────────────────┘                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Vec<&Product> in catalog order                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Barcode scanners "type" an entire code in under 50ms, so a
//! barcode-shaped query goes straight to the exact lookup.

use tracing::debug;
use uuid::Uuid;

use lumi_core::error::{CoreResult, ValidationError};
use lumi_core::types::Product;
use lumi_core::validation;

/// The product catalog consumed by cart commands.
///
/// Products keep their insertion order (the order the frontend displays
/// them in). Barcodes are unique; inserting a duplicate is rejected.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        ProductCatalog {
            products: Vec::new(),
        }
    }

    /// Adds a product after validating it.
    ///
    /// ## Errors
    /// - Empty or oversized name
    /// - Negative price or stock
    /// - Malformed barcode
    /// - Duplicate id or barcode
    pub fn insert(&mut self, product: Product) -> CoreResult<()> {
        validation::validate_product_name(&product.name)?;
        validation::validate_price_cents(product.price_cents)?;
        validation::validate_stock(product.stock)?;
        validation::validate_barcode(&product.barcode)?;

        if self.products.iter().any(|p| p.id == product.id) {
            return Err(ValidationError::Duplicate {
                field: "product id".to_string(),
                value: product.id,
            }
            .into());
        }

        if self.products.iter().any(|p| p.barcode == product.barcode) {
            return Err(ValidationError::Duplicate {
                field: "barcode".to_string(),
                value: product.barcode,
            }
            .into());
        }

        debug!(id = %product.id, name = %product.name, "product added to catalog");
        self.products.push(product);
        Ok(())
    }

    /// Looks a product up by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks a product up by exact barcode.
    pub fn get_by_barcode(&self, barcode: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.barcode == barcode)
    }

    /// Searches the catalog.
    ///
    /// Barcode-shaped queries (8-13 digits) do an exact barcode lookup;
    /// anything else matches case-insensitively against product names.
    /// An empty query returns the whole catalog.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim();

        if query.is_empty() {
            return self.products.iter().collect();
        }

        if is_barcode_query(query) {
            return self.get_by_barcode(query).into_iter().collect();
        }

        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Products in a category, in catalog order.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Distinct categories in first-seen order (drives the filter row).
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category.clone());
            }
        }
        seen
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Checks if a query looks like a barcode (8-13 numeric digits).
///
/// Covers EAN-8 (8), UPC-A (12) and EAN-13 (13) lengths.
fn is_barcode_query(query: &str) -> bool {
    let len = query.len();
    (8..=13).contains(&len) && query.chars().all(|c| c.is_ascii_digit())
}

/// Builds the demo catalog: the six sample products the frontend ships
/// with, spanning every category of the filter row.
pub fn sample_catalog() -> ProductCatalog {
    let mut catalog = ProductCatalog::new();

    let samples = [
        ("Apple iPhone 15", 99999, "1234567890123", "electronics", 15),
        ("Organic Bananas", 249, "1234567890124", "produce", 50),
        ("Coca-Cola 2L", 399, "1234567890125", "beverages", 30),
        ("Bread Loaf", 299, "1234567890126", "bakery", 25),
        ("Milk 1L", 499, "1234567890127", "dairy", 40),
        ("Samsung TV 55\"", 79999, "1234567890128", "electronics", 8),
    ];

    for (name, price_cents, barcode, category, stock) in samples {
        catalog
            .insert(Product {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                price_cents,
                barcode: barcode.to_string(),
                category: category.to_string(),
                stock,
            })
            .expect("sample catalog data is valid");
    }

    catalog
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lumi_core::CoreError;

    fn product(name: &str, barcode: &str, category: &str) -> Product {
        Product {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            price_cents: 399,
            barcode: barcode.to_string(),
            category: category.to_string(),
            stock: 10,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut catalog = ProductCatalog::new();
        let cola = product("Coca-Cola 2L", "1234567890125", "beverages");
        let id = cola.id.clone();

        catalog.insert(cola).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&id).unwrap().name, "Coca-Cola 2L");
        assert!(catalog.get("ghost").is_none());
    }

    #[test]
    fn test_insert_rejects_duplicate_barcode() {
        let mut catalog = ProductCatalog::new();
        catalog
            .insert(product("Coca-Cola 2L", "1234567890125", "beverages"))
            .unwrap();

        let err = catalog
            .insert(product("Pepsi 2L", "1234567890125", "beverages"))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_insert_validates_fields() {
        let mut catalog = ProductCatalog::new();

        let bad_name = product("", "1234567890125", "beverages");
        assert!(catalog.insert(bad_name).is_err());

        let mut bad_price = product("Cola", "1234567890125", "beverages");
        bad_price.price_cents = -1;
        assert!(catalog.insert(bad_price).is_err());

        let bad_barcode = product("Cola", "12-34", "beverages");
        assert!(catalog.insert(bad_barcode).is_err());
    }

    #[test]
    fn test_search_by_name_case_insensitive() {
        let mut catalog = ProductCatalog::new();
        catalog
            .insert(product("Coca-Cola 2L", "1234567890125", "beverages"))
            .unwrap();
        catalog
            .insert(product("Bread Loaf", "1234567890126", "bakery"))
            .unwrap();

        let hits = catalog.search("cola");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Coca-Cola 2L");

        assert!(catalog.search("granola").is_empty());
    }

    #[test]
    fn test_search_barcode_shaped_query_is_exact() {
        let mut catalog = ProductCatalog::new();
        catalog
            .insert(product("Coca-Cola 2L", "1234567890125", "beverages"))
            .unwrap();

        let hits = catalog.search("1234567890125");
        assert_eq!(hits.len(), 1);

        // Barcode-shaped but unknown: no name fallback
        assert!(catalog.search("9999999999999").is_empty());
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search("").len(), catalog.len());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.categories(),
            vec!["electronics", "produce", "beverages", "bakery", "dairy"]
        );
        assert_eq!(catalog.by_category("electronics").len(), 2);
    }

    #[test]
    fn test_is_barcode_query() {
        assert!(is_barcode_query("12345678"));
        assert!(is_barcode_query("1234567890123"));
        assert!(!is_barcode_query("1234567"));
        assert!(!is_barcode_query("12345678901234"));
        assert!(!is_barcode_query("cola12345"));
    }

    #[test]
    fn test_sample_catalog_contents() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(
            catalog.get_by_barcode("1234567890124").unwrap().name,
            "Organic Bananas"
        );
    }
}
