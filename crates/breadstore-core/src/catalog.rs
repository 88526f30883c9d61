//! # Catalog
//!
//! The read-only product list and the queries the product screens run on it.
//!
//! ## Queries
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product list screen                                                    │
//! │                                                                         │
//! │  [ Semua ] [ Roti Tawar ] [ Pastry ] ...   ◄── filter_by_category      │
//! │  🔍 "croissant"                             ◄── search                  │
//! │                                                                         │
//! │  Popular:  🍞 🥐 🧁                          ◄── filter_popular          │
//! │  All:      filtered + searched               ◄── browse                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every query preserves catalog order and borrows from the catalog; nothing
//! here allocates products or fails. An unrecognised category label simply
//! matches nothing.

use std::collections::HashSet;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Category, Product, Rating};
use crate::ALL_CATEGORIES_LABEL;

// =============================================================================
// Category Filter
// =============================================================================

/// Category chip selection: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parses a chip label.
    ///
    /// `"Semua"` and `"all"` (any case) select everything; otherwise the
    /// label must name a category. Returns `None` for anything else.
    pub fn parse(label: &str) -> Option<CategoryFilter> {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case(ALL_CATEGORIES_LABEL) || trimmed.eq_ignore_ascii_case("all")
        {
            return Some(CategoryFilter::All);
        }
        Category::from_label(trimmed).map(CategoryFilter::Only)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    fn admits(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// An immutable, ordered set of products with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.clone(),
                }
                .into());
            }
        }
        Ok(Catalog { products })
    }

    /// The bakery's shelf: eight breads and pastries.
    pub fn bakery() -> Self {
        Catalog {
            products: bakery_products(),
        }
    }

    /// Looks a product up by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Every product, in catalog order.
    pub fn list_all(&self) -> Vec<&Product> {
        self.products.iter().collect()
    }

    /// Products in the selected category; `All` returns the whole catalog.
    pub fn filter_by_category(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.admits(p)).collect()
    }

    /// Same as [`Catalog::filter_by_category`], keyed by chip label.
    ///
    /// ```rust
    /// use breadstore_core::Catalog;
    ///
    /// let catalog = Catalog::bakery();
    /// assert_eq!(catalog.filter_by_category_label("Semua").len(), catalog.len());
    /// assert_eq!(catalog.filter_by_category_label("Pastry").len(), 2);
    /// assert!(catalog.filter_by_category_label("Kue Lapis").is_empty());
    /// ```
    pub fn filter_by_category_label(&self, label: &str) -> Vec<&Product> {
        match CategoryFilter::parse(label) {
            Some(filter) => self.filter_by_category(filter),
            None => Vec::new(),
        }
    }

    /// Products flagged as popular.
    pub fn filter_popular(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_popular).collect()
    }

    /// Category filter and text search combined, as the product list does.
    pub fn browse(&self, filter: CategoryFilter, query: &str) -> Vec<&Product> {
        search(query, self.filter_by_category(filter))
    }

    /// Chip labels in display order, starting with "Semua".
    pub fn categories() -> Vec<&'static str> {
        std::iter::once(ALL_CATEGORIES_LABEL)
            .chain(Category::ALL.iter().map(Category::label))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::bakery()
    }
}

// =============================================================================
// Search
// =============================================================================

/// Case-insensitive substring search over name and description.
///
/// An empty or whitespace-only query returns `candidates` unchanged.
///
/// ```rust
/// use breadstore_core::catalog::{search, Catalog};
///
/// let catalog = Catalog::bakery();
/// let hits = search("CROISSANT", catalog.list_all());
/// assert_eq!(hits.len(), 1);
/// assert_eq!(search("", catalog.list_all()).len(), catalog.len());
/// ```
pub fn search<'a, I>(query: &str, candidates: I) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return candidates.into_iter().collect();
    }

    candidates
        .into_iter()
        .filter(|p| p.matches_lowercase(&needle))
        .collect()
}

// =============================================================================
// Seed Data
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    category: Category,
    price: i64,
    description: &str,
    emoji: &str,
    rating_tenths: u8,
    is_popular: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category,
        price: Money::from_rupiah(price),
        description: description.to_string(),
        emoji: emoji.to_string(),
        rating: Rating::clamped(rating_tenths),
        is_popular,
    }
}

fn bakery_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Roti Tawar Premium",
            Category::RotiTawar,
            15_000,
            "Roti tawar lembut dengan tekstur yang sempurna untuk sarapan sehat",
            "🍞",
            48,
            true,
        ),
        product(
            "2",
            "Croissant Butter",
            Category::Pastry,
            25_000,
            "Croissant dengan mentega premium, renyah di luar lembut di dalam",
            "🥐",
            47,
            true,
        ),
        product(
            "3",
            "Donat Glazed",
            Category::Donat,
            12_000,
            "Donat manis dengan glazed topping yang lezat",
            "🍩",
            46,
            false,
        ),
        product(
            "4",
            "Baguette Klasik",
            Category::RotiKeras,
            18_000,
            "Roti Prancis klasik dengan kulit renyah dan interior lembut",
            "🥖",
            45,
            false,
        ),
        product(
            "5",
            "Muffin Blueberry",
            Category::Muffin,
            20_000,
            "Muffin lembut dengan blueberry segar di setiap gigitan",
            "🧁",
            46,
            true,
        ),
        product(
            "6",
            "Pretzel Original",
            Category::Pretzel,
            16_000,
            "Pretzel dengan garam kasar, sempurna untuk camilan",
            "🥨",
            44,
            false,
        ),
        product(
            "7",
            "Roti Gandum Sehat",
            Category::RotiSehat,
            22_000,
            "Roti gandum utuh kaya serat untuk gaya hidup sehat",
            "🍞",
            45,
            false,
        ),
        product(
            "8",
            "Danish Pastry",
            Category::Pastry,
            28_000,
            "Pastry Denmark dengan isian krim vanilla yang lezat",
            "🥐",
            47,
            false,
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_bakery_catalog_has_unique_ids() {
        let catalog = Catalog::bakery();
        assert_eq!(catalog.len(), 8);
        assert!(Catalog::new(bakery_products()).is_ok());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut products = bakery_products();
        products.push(products[0].clone());
        assert!(Catalog::new(products).is_err());
    }

    #[test]
    fn test_list_all_preserves_order() {
        let catalog = Catalog::bakery();
        assert_eq!(
            ids(&catalog.list_all()),
            vec!["1", "2", "3", "4", "5", "6", "7", "8"]
        );
    }

    #[test]
    fn test_all_filter_equals_list_all() {
        let catalog = Catalog::bakery();
        let all = catalog.list_all();
        assert_eq!(catalog.filter_by_category(CategoryFilter::All), all);
        assert_eq!(catalog.filter_by_category_label("Semua"), all);
        assert_eq!(catalog.filter_by_category_label("all"), all);
        assert_eq!(catalog.filter_by_category_label("ALL"), all);
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = Catalog::bakery();
        let pastries = catalog.filter_by_category(Category::Pastry.into());
        assert_eq!(ids(&pastries), vec!["2", "8"]);
        assert_eq!(catalog.filter_by_category_label("Roti Keras").len(), 1);
    }

    #[test]
    fn test_unknown_category_label_is_empty_not_error() {
        let catalog = Catalog::bakery();
        assert!(catalog.filter_by_category_label("Kue Basah").is_empty());
        assert!(catalog.filter_by_category_label("").is_empty());
    }

    #[test]
    fn test_filter_popular() {
        let catalog = Catalog::bakery();
        assert_eq!(ids(&catalog.filter_popular()), vec!["1", "2", "5"]);
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let catalog = Catalog::bakery();

        // name
        assert_eq!(ids(&search("donat", catalog.list_all())), vec!["3"]);
        // description only ("mentega" appears in the croissant description)
        assert_eq!(ids(&search("MENTEGA", catalog.list_all())), vec!["2"]);
        // both breads called "Roti ..." plus the baguette description
        assert_eq!(ids(&search("roti", catalog.list_all())), vec!["1", "4", "7"]);
        assert!(search("sourdough", catalog.list_all()).is_empty());
    }

    #[test]
    fn test_empty_search_returns_candidates_unchanged() {
        let catalog = Catalog::bakery();
        let popular = catalog.filter_popular();
        assert_eq!(search("", popular.clone()), popular);
        assert_eq!(search("   ", popular.clone()), popular);
    }

    #[test]
    fn test_browse_combines_filter_and_search() {
        let catalog = Catalog::bakery();
        let hits = catalog.browse(CategoryFilter::Only(Category::Pastry), "krim");
        assert_eq!(ids(&hits), vec!["8"]);
        assert_eq!(catalog.browse(CategoryFilter::All, "").len(), 8);
    }

    #[test]
    fn test_categories_start_with_all() {
        let labels = Catalog::categories();
        assert_eq!(labels.len(), 8);
        assert_eq!(labels[0], "Semua");
        assert_eq!(labels[1], "Roti Tawar");
        for label in labels {
            assert!(CategoryFilter::parse(label).is_some());
        }
    }
}
