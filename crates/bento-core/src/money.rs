//! # Money Module
//!
//! The `Money` amount type: plain integers end to end, floats never.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHY NOT FLOATS                                                         │
//! │                                                                         │
//! │  What floats do to prices:                                              │
//! │    0.1 + 0.2  ──►  0.30000000000000004   ❌                             │
//! │                                                                         │
//! │  What integers do:                                                      │
//! │    66 + 88  ──►  154, exactly, every time   ✅                          │
//! │                                                                         │
//! │  Bento never decides what the unit is (cents, fen, yen, points).        │
//! │  Menus supply integer prices; totals stay integers end to end.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bento_core::money::Money;
//!
//! // Only integer construction exists; there is no float entry point
//! let price = Money::from_units(66);
//!
//! // Sums and scaling stay exact
//! let doubled = price * 2;                       // 132
//! let total = price + Money::from_units(88);     // 154
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an integer count of the currency's
/// smallest unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: the delivery shortfall (minimum - total) goes
///   negative once the threshold is passed, so the type must carry sign
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Unit-agnostic**: no assumption about decimals or symbols; display
///   formatting belongs to the consuming surface, not to this type
///
/// ## Where Money Flows
/// ```text
/// MenuItem.price ──► CartItem line total ──► Cart order total
///                                                  │
///                              delivery-minimum comparison
///                                                  │
///                              shortfall (minimum - total)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from integer units.
    ///
    /// ## Example
    /// ```rust
    /// use bento_core::money::Money;
    ///
    /// let price = Money::from_units(66);
    /// assert_eq!(price.units(), 66);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value as integer units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// The zero amount.
    ///
    /// ## Example
    /// ```rust
    /// use bento_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.units(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// True when the amount is exactly zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// True for amounts above zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// True for amounts below zero, e.g. the shortfall of an order that
    /// already passed the delivery minimum.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Scales a unit price by a selected quantity, giving a line total.
    ///
    /// ## Example
    /// ```rust
    /// use bento_core::money::Money;
    ///
    /// let unit_price = Money::from_units(66);
    /// assert_eq!(unit_price.multiply_quantity(3).units(), 198);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation prints the raw unit count.
///
/// ## Note
/// Intentionally bare: this crate does not know the currency, so it
/// cannot place symbols or decimal points. The view layer owns that.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An unset amount is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Sum of two amounts.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// In-place addition, for running totals.
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Difference of two amounts; this is how the delivery shortfall
/// (minimum minus total) is computed, so the result may be negative.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// In-place subtraction.
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Quantity scaling with a plain integer literal.
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Quantity scaling with i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(66);
        assert_eq!(money.units(), 66);
    }

    #[test]
    fn test_display_is_bare_units() {
        assert_eq!(format!("{}", Money::from_units(66)), "66");
        assert_eq!(format!("{}", Money::from_units(0)), "0");
        assert_eq!(format!("{}", Money::from_units(-34)), "-34");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(100);
        let b = Money::from_units(34);

        assert_eq!((a + b).units(), 134);
        assert_eq!((a - b).units(), 66);
        let tripled: Money = b * 3;
        assert_eq!(tripled.units(), 102);
    }

    #[test]
    fn test_assign_operators() {
        let mut total = Money::zero();
        total += Money::from_units(66);
        total += Money::from_units(88);
        assert_eq!(total.units(), 154);

        total -= Money::from_units(88);
        assert_eq!(total.units(), 66);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_units(88);
        let line_total = unit_price.multiply_quantity(2);
        assert_eq!(line_total.units(), 176);

        assert_eq!(unit_price.multiply_quantity(0), Money::zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_units(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        // A shortfall past the threshold is negative and stays representable
        let overshoot = Money::from_units(100) - Money::from_units(132);
        assert!(overshoot.is_negative());
        assert_eq!(overshoot.units(), -32);
    }

    #[test]
    fn test_ordering_for_threshold_compare() {
        assert!(Money::from_units(132) >= Money::from_units(100));
        assert!(Money::from_units(100) >= Money::from_units(100));
        assert!(Money::from_units(66) < Money::from_units(100));
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Money::default(), Money::zero());
    }
}
