//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing prices as floats drifts with line order:                       │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  Parsing prices out of display strings ("Rp 15.000") silently turns     │
//! │  a malformed price into zero.                                           │
//! │                                                                         │
//! │  OUR SOLUTION: whole rupiah in an i64                                   │
//! │    15_000 × 3 + 25_000 = 70_000, in any order, every time               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use breadstore_core::money::Money;
//!
//! let price = Money::from_rupiah(15_000);
//! let line = price * 3;
//! assert_eq!((line + Money::from_rupiah(25_000)).rupiah(), 70_000);
//! assert_eq!(line.to_string(), "Rp 45.000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole rupiah (IDR has no minor unit in circulation).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences between totals may be negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serialized as a plain number**: the front end formats it
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from whole rupiah.
    ///
    /// ## Example
    /// ```rust
    /// use breadstore_core::money::Money;
    ///
    /// let price = Money::from_rupiah(25_000);
    /// assert_eq!(price.rupiah(), 25_000);
    /// ```
    #[inline]
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Money(rupiah)
    }

    /// Returns the amount in whole rupiah.
    #[inline]
    pub const fn rupiah(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Formats the amount with a currency symbol and a thousands separator.
    ///
    /// ## Example
    /// ```rust
    /// use breadstore_core::money::Money;
    ///
    /// let total = Money::from_rupiah(1_250_000);
    /// assert_eq!(total.format_grouped("Rp", '.'), "Rp 1.250.000");
    /// assert_eq!(total.format_grouped("IDR", ','), "IDR 1,250,000");
    /// ```
    pub fn format_grouped(&self, symbol: &str, separator: char) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(digit);
        }

        let sign = if self.0 < 0 { "-" } else { "" };
        if symbol.is_empty() {
            format!("{sign}{grouped}")
        } else {
            format!("{sign}{symbol} {grouped}")
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount the way the storefront labels prices: `Rp 15.000`.
///
/// ## Note
/// Use `ConfigState::format_currency` in the app when the symbol or
/// separator is configurable.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_grouped("Rp", '.'))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
