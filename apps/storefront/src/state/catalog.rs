//! # Catalog State
//!
//! Shares the read-only product catalog between commands and carts.
//!
//! ## Thread Safety
//! The catalog never changes after startup, so an `Arc` is enough; no lock
//! is ever taken to read it.

use std::sync::Arc;

use breadstore_core::Catalog;

/// Wrapper around the shared `Catalog`.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns a reference to the inner Catalog.
    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }

    /// Another handle to the same catalog, for building carts.
    pub fn shared(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        CatalogState::new(Catalog::bakery())
    }
}
