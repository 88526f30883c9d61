//! # Catalog Commands
//!
//! Commands behind the product list screen.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product List Flow                                    │
//! │                                                                         │
//! │  Screen opens                                                           │
//! │       │                                                                 │
//! │       ├──► list_categories()   → chip row ("Semua", "Roti Tawar", ...) │
//! │       ├──► popular_products()  → "Popular" carousel                     │
//! │       └──► browse_products(None, None) → full grid                      │
//! │                                                                         │
//! │  User taps a chip / types in the search box                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  browse_products(Some("Pastry"), Some("butter"))                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  category filter first, then case-insensitive text search              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use breadstore_core::catalog::search;
use breadstore_core::{Catalog, CategoryFilter, Product};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;

fn owned(products: Vec<&Product>) -> Vec<Product> {
    products.into_iter().cloned().collect()
}

/// Lists every product in catalog order.
pub fn list_products(catalog: &CatalogState) -> Vec<Product> {
    debug!("list_products command");
    owned(catalog.inner().list_all())
}

/// Gets one product by id.
///
/// ## Errors
/// `NOT_FOUND` when the id is not in the catalog.
pub fn get_product(catalog: &CatalogState, id: &str) -> Result<Product, ApiError> {
    debug!(id = %id, "get_product command");
    catalog
        .inner()
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Product", id))
}

/// Products under a category chip label.
///
/// "Semua" (or "all") returns everything; an unknown label returns an empty
/// list rather than an error.
pub fn products_by_category(catalog: &CatalogState, category: &str) -> Vec<Product> {
    debug!(category = %category, "products_by_category command");
    owned(catalog.inner().filter_by_category_label(category))
}

/// Products flagged as popular.
pub fn popular_products(catalog: &CatalogState) -> Vec<Product> {
    debug!("popular_products command");
    owned(catalog.inner().filter_popular())
}

/// Searches names and descriptions.
///
/// ## Arguments
/// * `query` - Search term; blank returns every product
pub fn search_products(catalog: &CatalogState, query: &str) -> Vec<Product> {
    debug!(query = %query, "search_products command");

    let results = owned(search(query, catalog.inner().list_all()));
    debug!(query = %query, results = results.len(), "Search complete");
    results
}

/// Category chip and search box combined.
///
/// ## Arguments
/// * `category` - Chip label (default: "Semua")
/// * `query` - Search term (default: empty)
pub fn browse_products(
    catalog: &CatalogState,
    category: Option<&str>,
    query: Option<&str>,
) -> Vec<Product> {
    let query = query.unwrap_or_default();
    debug!(category = ?category, query = %query, "browse_products command");

    let filter = match category {
        None => CategoryFilter::All,
        Some(label) => match CategoryFilter::parse(label) {
            Some(filter) => filter,
            None => return Vec::new(),
        },
    };

    owned(catalog.inner().browse(filter, query))
}

/// Chip labels in display order, "Semua" first.
pub fn list_categories() -> Vec<&'static str> {
    debug!("list_categories command");
    Catalog::categories()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_list_and_get() {
        let catalog = CatalogState::default();
        assert_eq!(list_products(&catalog).len(), 8);
        assert_eq!(get_product(&catalog, "2").unwrap().name, "Croissant Butter");

        let err = get_product(&catalog, "99").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_products_by_category() {
        let catalog = CatalogState::default();
        assert_eq!(products_by_category(&catalog, "Semua").len(), 8);
        assert_eq!(products_by_category(&catalog, "all").len(), 8);
        assert_eq!(ids(&products_by_category(&catalog, "Donat")), vec!["3"]);
        assert!(products_by_category(&catalog, "Kue Lapis").is_empty());
    }

    #[test]
    fn test_popular_products() {
        let catalog = CatalogState::default();
        assert_eq!(ids(&popular_products(&catalog)), vec!["1", "2", "5"]);
    }

    #[test]
    fn test_search_products() {
        let catalog = CatalogState::default();
        assert_eq!(ids(&search_products(&catalog, "  donat ")), vec!["3"]);
        assert_eq!(search_products(&catalog, "").len(), 8);
        assert_eq!(search_products(&catalog, "   ").len(), 8);
    }

    #[test]
    fn test_long_query_is_just_a_miss() {
        let catalog = CatalogState::default();
        let long = "a".repeat(500);
        assert!(search_products(&catalog, &long).is_empty());
        assert!(browse_products(&catalog, Some("Pastry"), Some(&long)).is_empty());
    }

    #[test]
    fn test_browse_products() {
        let catalog = CatalogState::default();
        assert_eq!(browse_products(&catalog, None, None).len(), 8);
        assert_eq!(
            ids(&browse_products(&catalog, Some("Pastry"), Some("croissant"))),
            vec!["2"]
        );
        assert!(browse_products(&catalog, Some("Pastry"), Some("donat")).is_empty());
        assert!(browse_products(&catalog, Some("unknown"), None).is_empty());
    }

    #[test]
    fn test_list_categories() {
        let labels = list_categories();
        assert_eq!(labels.len(), 8);
        assert_eq!(labels[0], "Semua");
    }
}
