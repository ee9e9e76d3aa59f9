//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Catalog prices arrive as floats:                                       │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3 × 12312 + 7756 + 2 × 9100 = 62892 cents = $628.92  ✅             │
//! │                                                                         │
//! │  The catalog still speaks decimals on the wire; we convert ONCE at the  │
//! │  boundary (see `serde_decimal`) and never touch a float again.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use onlinestore_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let doubled = price * 2_i64;         // $21.98
//! assert_eq!(doubled.cents(), 2198);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic stays closed under subtraction
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use onlinestore_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal major-unit amount, rounding to
    /// the nearest cent.
    ///
    /// Only the wire boundary should call this: the catalog API sends prices
    /// as JSON numbers (`109.95`).
    ///
    /// ## Example
    /// ```rust
    /// use onlinestore_core::money::Money;
    ///
    /// assert_eq!(Money::try_from_decimal(123.12).unwrap().cents(), 12312);
    /// assert_eq!(Money::try_from_decimal(0.1 + 0.2).unwrap().cents(), 30);
    /// assert!(Money::try_from_decimal(f64::NAN).is_err());
    /// ```
    pub fn try_from_decimal(amount: f64) -> CoreResult<Self> {
        let cents = (amount * 100.0).round();
        if !cents.is_finite() || cents.abs() > i64::MAX as f64 {
            return Err(CoreError::UnrepresentableAmount(amount.to_string()));
        }
        Ok(Money(cents as i64))
    }

    /// Returns the value as a decimal major-unit amount (for the wire only).
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use onlinestore_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use onlinestore_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(9100); // $91.00
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 18200);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering (`$10.99`).
///
/// ## Note
/// User-facing strings go through [`crate::CurrencyFormat`], which knows
/// about grouping separators and the configured symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
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

// =============================================================================
// Wire Conversion
// =============================================================================

/// Serde adapter that reads and writes `Money` as a decimal JSON number.
///
/// ```rust,ignore
/// #[serde(with = "crate::money::serde_decimal")]
/// pub price: Money,
/// ```
pub mod serde_decimal {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::Money;

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = f64::deserialize(deserializer)?;
        Money::try_from_decimal(amount).map_err(de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_decimal_rounds_to_nearest_cent() {
        assert_eq!(Money::try_from_decimal(77.56).unwrap().cents(), 7756);
        assert_eq!(Money::try_from_decimal(91.0).unwrap().cents(), 9100);
        assert_eq!(Money::try_from_decimal(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::try_from_decimal(-5.5).unwrap().cents(), -550);
    }

    #[test]
    fn test_from_decimal_rejects_non_finite() {
        assert!(Money::try_from_decimal(f64::INFINITY).is_err());
        assert!(Money::try_from_decimal(f64::NAN).is_err());
        assert!(Money::try_from_decimal(1e300).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3_i64).cents(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
    }

    #[test]
    fn test_sum_has_no_float_drift() {
        let total: Money = [
            Money::from_cents(12312).multiply_quantity(3),
            Money::from_cents(7756),
            Money::from_cents(9100).multiply_quantity(2),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.cents(), 62892);
    }

    #[test]
    fn test_serde_decimal_roundtrip() {
        #[derive(Serialize, Deserialize)]
        struct Priced {
            #[serde(with = "serde_decimal")]
            price: Money,
        }

        let parsed: Priced = serde_json::from_str(r#"{"price": 109.95}"#).unwrap();
        assert_eq!(parsed.price.cents(), 10995);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"{"price":109.95}"#);
    }
}
