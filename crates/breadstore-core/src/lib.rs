//! # breadstore-core: Pure Business Logic for the Bakery Storefront
//!
//! This crate holds everything the storefront computes: the product catalog,
//! the cart aggregation and pricing engine, credential checks and input
//! validation. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Breadstore Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Mobile Front End                             │   │
//! │  │    Login ──► Product List ──► Cart ──► Checkout Dialog          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/storefront                              │   │
//! │  │    CartState, SessionState, ConfigState, ApiError               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ breadstore-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ │   │
//! │  │   │  types  │ │  money  │ │ catalog │ │  cart   │ │   auth   │ │   │
//! │  │   │ Product │ │  Money  │ │ filters │ │  Cart   │ │   Role   │ │   │
//! │  │   │Category │ │         │ │ search  │ │CartLine │ │Authentic.│ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Rating)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Read-only product catalog and its queries
//! - [`cart`] - Cart lines, quantity management and totals
//! - [`auth`] - Roles and the `Authenticator` capability
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use breadstore_core::{Cart, Catalog};
//!
//! let catalog = Arc::new(Catalog::bakery());
//! let mut cart = Cart::new(Arc::clone(&catalog));
//!
//! cart.add("1", 2).unwrap(); // Roti Tawar Premium, Rp 15.000 each
//! assert_eq!(cart.total_item_count(), 2);
//! assert_eq!(cart.total_price().rupiah(), 30_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use auth::{Authenticator, Credentials, Role, StaticAuthenticator};
pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::{Catalog, CategoryFilter};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of distinct lines allowed in a single cart.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single product in the cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Label of the "every category" filter chip, as shown in the product list.
pub const ALL_CATEGORIES_LABEL: &str = "Semua";
