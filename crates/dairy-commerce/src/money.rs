//! Money type for representing monetary values.
//!
//! Amounts are held in minor units (cents) so that totals built from many
//! additions never drift. A decimal price with more precision than a cent
//! is rejected on entry rather than rounded, so stored totals are exact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies. Codes deserialize case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum Currency {
    #[default]
    USD,
    EUR,
    ZAR,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::ZAR => "ZAR",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::ZAR => "R",
        }
    }

    /// Get the number of decimal places for this currency. Every
    /// supported currency uses cents.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "ZAR" => Some(Currency::ZAR),
            _ => None,
        }
    }

    fn minor_units(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_code(&code).ok_or_else(|| format!("unsupported currency: {code}"))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest
    /// minor unit.
    ///
    /// Non-finite or out-of-range input yields zero. Untrusted prices should
    /// go through [`Money::try_from_decimal`], which rejects them instead.
    ///
    /// ```
    /// use dairy_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(35.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 3599);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        scale(amount, currency)
            .map(|scaled| Self::new(scaled.round() as i64, currency))
            .unwrap_or_else(|| Self::zero(currency))
    }

    /// Create a Money value from a decimal amount that is a whole number of
    /// minor units.
    ///
    /// Returns `None` for NaN, infinities, out-of-range amounts and amounts
    /// finer than the currency's minor unit (`0.005` dollars).
    pub fn try_from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        let scaled = scale(amount, currency)?;
        let whole = scaled.round();
        // 35.99 * 100 lands a hair below 3599; only binary noise is tolerated.
        if (scaled - whole).abs() > SUB_UNIT_TOLERANCE * whole.abs().max(1.0) {
            return None;
        }
        Some(Self::new(whole as i64, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_units() as f64
    }

    /// Format as a display string (e.g., "$35.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "35.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        let units = self.currency.minor_units() as u64;
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:0places$}", sign, abs / units, abs % units)
    }

    /// Try to add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values, returning None on mismatch or overflow.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

const SUB_UNIT_TOLERANCE: f64 = 1e-12;

/// `amount` in minor units, before rounding. `None` if non-finite or out of range.
fn scale(amount: f64, currency: Currency) -> Option<f64> {
    if !amount.is_finite() {
        return None;
    }
    let scaled = amount * currency.minor_units() as f64;
    if scaled.round() >= i64::MAX as f64 || scaled.round() < i64::MIN as f64 {
        return None;
    }
    Some(scaled)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
