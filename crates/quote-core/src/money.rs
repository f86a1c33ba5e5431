//! # Money Module
//!
//! Provides the `Money` type and the currency formatter.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.85 + 0.45 + 29.9 = 31.200000000000003  ❌ WRONG!                   │
//! │                                                                         │
//! │  Catalog prices arrive as decimals (29.9, 0.85, 0.45), so we keep      │
//! │  them as exact base-10 decimals and only round when displaying:        │
//! │                                                                         │
//! │    unit = 29.9 + 0.5 + 0.85 + 0.45   = 31.70   (exact)                 │
//! │    subtotal = 31.70 × 10 + 60         = 377.00  (exact)                │
//! │    display  = round(377.00, 2)        = "$377.00"                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quote_core::money::{format_currency, Money};
//!
//! let price = Money::from_cents(2990); // $29.90
//! let total = price * 10 + Money::from_cents(3500);
//!
//! assert_eq!(format_currency(total, Some("EUR")), "€334.00");
//! assert_eq!(total.to_string(), "$334.00");
//! ```

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

/// Currency code used when the caller doesn't name one.
pub const DEFAULT_CURRENCY: &str = "USD";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in major units (dollars, euros, ...).
///
/// ## Design Decisions
/// - **Decimal, not f64**: catalog prices are base-10 and must add up exactly
/// - **Unrounded**: intermediate sums keep full precision; rounding to two
///   places is a display concern handled by [`format_currency`]
/// - **Serde**: accepts JSON/TOML numbers (`29.9`) or strings (`"29.9"`);
///   always serializes as a number so page scripts can do arithmetic on it
/// - **Saturating**: arithmetic clamps to the `Decimal` range instead of
///   panicking
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    #[ts(type = "number")]
    Decimal,
);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.to_string(), "$10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Wraps an existing decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the underlying decimal amount (unrounded).
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies money by a quantity, saturating at the `Decimal` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2350); // $23.50
    /// assert_eq!(unit_price.multiply_quantity(10), Money::from_cents(23500));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(Decimal::from(qty)))
    }

    /// Rounds half away from zero to two fractional digits.
    ///
    /// Only used at the display boundary.
    pub fn round_to_cents(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Currencies the widget knows a display symbol for.
///
/// Anything else is displayed with `$`, no exchange-rate conversion happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Brl,
}

impl Currency {
    /// Looks up a currency by its ISO-like code (case-sensitive, like the
    /// catalog files).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            "BRL" => Some(Currency::Brl),
            _ => None,
        }
    }

    /// Display prefix for this currency.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Brl => "R$",
        }
    }

    /// Symbol for an arbitrary code, falling back to `$` for unknown codes.
    pub fn symbol_for_code(code: &str) -> &'static str {
        Currency::from_code(code).unwrap_or(Currency::Usd).symbol()
    }
}

/// Formats an amount for display: symbol prefix, exactly two decimals, no
/// grouping separators.
///
/// `None` formats as US dollars.
///
/// ## Example
/// ```rust
/// use quote_core::money::{format_currency, Money};
///
/// let amount = Money::from_cents(2990);
/// assert_eq!(format_currency(amount, Some("USD")), "$29.90");
/// assert_eq!(format_currency(amount, Some("EUR")), "€29.90");
/// assert_eq!(format_currency(amount, Some("BRL")), "R$29.90");
/// assert_eq!(format_currency(amount, Some("JPY")), "$29.90");
/// assert_eq!(format_currency(amount, None), "$29.90");
/// ```
pub fn format_currency(amount: Money, currency: Option<&str>) -> String {
    let symbol = Currency::symbol_for_code(currency.unwrap_or(DEFAULT_CURRENCY));
    let rounded = amount.round_to_cents();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}{}{:.2}", sign, symbol, rounded.abs())
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount in US dollars.
///
/// Use [`format_currency`] with the catalog currency for UI output.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(*self, None))
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Multiplication by quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
