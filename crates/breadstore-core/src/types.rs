//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │     Rating      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  RotiTawar      │   │  tenths (u8)    │       │
//! │  │  name           │   │  Pastry         │   │  48 = 4.8 ★     │       │
//! │  │  category       │   │  Donat  ...     │   │  0..=50         │       │
//! │  │  price (Money)  │   └─────────────────┘   └─────────────────┘       │
//! │  │  rating         │                                                    │
//! │  │  is_popular     │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// The fixed set of bakery categories.
///
/// Each variant carries the label the product list shows on its filter chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    RotiTawar,
    Pastry,
    Donat,
    RotiKeras,
    Muffin,
    Pretzel,
    RotiSehat,
}

impl Category {
    /// Every category, in the order the filter chips are displayed.
    pub const ALL: [Category; 7] = [
        Category::RotiTawar,
        Category::Pastry,
        Category::Donat,
        Category::RotiKeras,
        Category::Muffin,
        Category::Pretzel,
        Category::RotiSehat,
    ];

    /// Display label ("Roti Tawar", "Pastry", ...).
    pub const fn label(&self) -> &'static str {
        match self {
            Category::RotiTawar => "Roti Tawar",
            Category::Pastry => "Pastry",
            Category::Donat => "Donat",
            Category::RotiKeras => "Roti Keras",
            Category::Muffin => "Muffin",
            Category::Pretzel => "Pretzel",
            Category::RotiSehat => "Roti Sehat",
        }
    }

    /// Looks a category up by its display label or its snake_case name.
    ///
    /// Matching ignores case and surrounding whitespace.
    ///
    /// ```rust
    /// use breadstore_core::Category;
    ///
    /// assert_eq!(Category::from_label("roti tawar"), Some(Category::RotiTawar));
    /// assert_eq!(Category::from_label("roti_sehat"), Some(Category::RotiSehat));
    /// assert_eq!(Category::from_label("Baguette"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Category> {
        let wanted = label.trim().to_lowercase().replace('_', " ");
        Category::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == wanted)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Rating
// =============================================================================

/// Customer rating from 0.0 to 5.0 stars, kept in tenths of a star.
///
/// ## Why Tenths?
/// Ratings are compared and sorted; an integer keeps that exact. `f32` is
/// produced only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct Rating(#[ts(type = "number")] u8);

impl Rating {
    /// Highest possible rating (5.0 stars).
    pub const MAX_TENTHS: u8 = 50;

    /// Creates a rating from tenths of a star (48 = 4.8).
    pub fn from_tenths(tenths: u8) -> Result<Self, ValidationError> {
        if tenths > Self::MAX_TENTHS {
            return Err(ValidationError::OutOfRange {
                field: "rating".to_string(),
                min: 0,
                max: i64::from(Self::MAX_TENTHS),
            });
        }
        Ok(Rating(tenths))
    }

    /// Const constructor for compile-time catalog data; clamps to 5.0.
    pub const fn clamped(tenths: u8) -> Self {
        if tenths > Self::MAX_TENTHS {
            Rating(Self::MAX_TENTHS)
        } else {
            Rating(tenths)
        }
    }

    #[inline]
    pub const fn tenths(&self) -> u8 {
        self.0
    }

    /// Returns the rating in stars (for display only).
    #[inline]
    pub fn stars(&self) -> f32 {
        f32::from(self.0) / 10.0
    }
}

impl Default for Rating {
    /// New products start at 4.5 stars, as the catalog always has.
    fn default() -> Self {
        Rating(45)
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(tenths: u8) -> Result<Self, Self::Error> {
        Rating::from_tenths(tenths)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product on the storefront shelf.
///
/// Products are immutable once the catalog is built; carts refer to them by
/// `id` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display name.
    pub name: String,

    pub category: Category,

    /// Unit price in whole rupiah.
    pub price: Money,

    pub description: String,

    /// Glyph shown in place of a product photo.
    pub emoji: String,

    pub rating: Rating,

    /// Shown in the "popular" strip above the product list.
    pub is_popular: bool,
}

impl Product {
    /// Case-insensitive substring match against name and description.
    ///
    /// `needle` must already be lowercased; see [`crate::catalog::search`].
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
