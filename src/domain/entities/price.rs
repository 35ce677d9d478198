//! Monetary amount stored as integer minor units.
//!
//! All conversion between minor units (cents) and the decimal major-unit
//! strings seen by clients happens here and nowhere else.

use serde::{Serialize, Serializer};
use std::fmt;

/// Number of minor units per major unit.
const MINOR_PER_MAJOR: i64 = 100;

/// Fraction digits in one minor unit.
const FRACTION_DIGITS: usize = 2;

/// Errors returned by [`Price::parse`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("amount is empty")]
    Empty,

    #[error("amount must not be negative")]
    Negative,

    #[error("amount is not a number")]
    NotANumber,

    #[error("amount has more than two decimal places")]
    TooPrecise,

    #[error("amount is too large")]
    Overflow,
}

/// A price in minor units (cents).
///
/// Serializes as a decimal string with exactly two fraction digits:
/// `Price::from_minor(12545)` becomes `"125.45"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, sqlx::Type)]
#[sqlx(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Whole major units, e.g. `Price::from_major(100)` is `100.00`.
    pub fn from_major(major: i64) -> Result<Self, PriceError> {
        if major < 0 {
            return Err(PriceError::Negative);
        }

        major
            .checked_mul(MINOR_PER_MAJOR)
            .map(Self)
            .ok_or(PriceError::Overflow)
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Parses a non-negative decimal amount in major units.
    ///
    /// Accepts `"100"`, `"125.4"`, `"125.45"`, `".5"` and `"7."`. Rejects
    /// signs, exponents and more than two fraction digits, so no rounding
    /// ever happens.
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let amount = Decimal::parse(input)?;

        if amount.has_sub_cent_digits() {
            return Err(PriceError::TooPrecise);
        }

        amount.whole_cents().map(Self)
    }

    /// Smallest price that is greater than or equal to `input`.
    ///
    /// Used for inclusive lower bounds: `"100.005"` becomes `100.01`, so
    /// `price >= 100.005` and `price >= 100.01` select the same rows.
    pub fn lower_bound(input: &str) -> Result<Self, PriceError> {
        let amount = Decimal::parse(input)?;
        let cents = amount.whole_cents()?;

        if amount.has_sub_cent_digits() {
            cents.checked_add(1).map(Self).ok_or(PriceError::Overflow)
        } else {
            Ok(Self(cents))
        }
    }

    /// Largest price that is less than or equal to `input`.
    ///
    /// Used for inclusive upper bounds: `"100.009"` becomes `100.00`.
    pub fn upper_bound(input: &str) -> Result<Self, PriceError> {
        Decimal::parse(input)?.whole_cents().map(Self)
    }
}

/// A validated non-negative decimal literal, split at the point.
struct Decimal<'a> {
    whole: &'a str,
    fraction: &'a str,
}

impl<'a> Decimal<'a> {
    fn parse(input: &'a str) -> Result<Self, PriceError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(PriceError::Empty);
        }

        if input.starts_with('-') {
            return Err(PriceError::Negative);
        }

        let (whole, fraction) = input.split_once('.').unwrap_or((input, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(PriceError::NotANumber);
        }

        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(PriceError::NotANumber);
        }

        Ok(Self { whole, fraction })
    }

    /// True when a non-zero digit follows the second fraction digit.
    fn has_sub_cent_digits(&self) -> bool {
        self.fraction
            .bytes()
            .skip(FRACTION_DIGITS)
            .any(|b| b != b'0')
    }

    /// The amount in minor units, truncating anything below one cent.
    fn whole_cents(&self) -> Result<i64, PriceError> {
        let whole: i64 = if self.whole.is_empty() {
            0
        } else {
            self.whole.parse().map_err(|_| PriceError::Overflow)?
        };

        let mut cents: i64 = 0;
        for (i, digit) in self.fraction.bytes().take(FRACTION_DIGITS).enumerate() {
            let scale = if i == 0 { 10 } else { 1 };
            cents += i64::from(digit - b'0') * scale;
        }

        whole
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|minor| minor.checked_add(cents))
            .ok_or(PriceError::Overflow)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = MINOR_PER_MAJOR.unsigned_abs();

        write!(f, "{sign}{}.{:02}", abs / per, abs % per)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_two_decimals() {
        let price = Price::parse("125.45").unwrap();
        assert_eq!(price.minor_units(), 12545);
        assert_eq!(price.to_string(), "125.45");
    }

    #[test]
    fn test_whole_amounts_are_padded() {
        assert_eq!(Price::parse("100").unwrap().minor_units(), 10000);
        assert_eq!(Price::from_minor(10000).to_string(), "100.00");
        assert_eq!(Price::from_major(200).unwrap(), Price::from_minor(20000));
    }

    #[test]
    fn test_single_fraction_digit_means_tens_of_cents() {
        assert_eq!(Price::parse("125.4").unwrap().minor_units(), 12540);
        assert_eq!(Price::parse(".5").unwrap().minor_units(), 50);
        assert_eq!(Price::parse("7.").unwrap().minor_units(), 700);
    }

    #[test]
    fn test_small_amounts_display() {
        assert_eq!(Price::from_minor(5).to_string(), "0.05");
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(Price::parse(""), Err(PriceError::Empty));
        assert_eq!(Price::parse("   "), Err(PriceError::Empty));
        assert_eq!(Price::parse("-1"), Err(PriceError::Negative));
        assert_eq!(Price::parse("abc"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("1e3"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("."), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("1.2.3"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("1.234"), Err(PriceError::TooPrecise));
        assert_eq!(Price::parse("1.230"), Ok(Price::from_minor(123)));
        assert_eq!(
            Price::parse("99999999999999999999"),
            Err(PriceError::Overflow)
        );
    }

    #[test]
    fn test_lower_bound_rounds_up_sub_cent_amounts() {
        assert_eq!(Price::lower_bound("100.005"), Ok(Price::from_minor(10001)));
        assert_eq!(Price::lower_bound("100.001"), Ok(Price::from_minor(10001)));
        assert_eq!(Price::lower_bound("100.000"), Ok(Price::from_minor(10000)));
        assert_eq!(Price::lower_bound("99.999"), Ok(Price::from_minor(10000)));
        assert_eq!(Price::lower_bound("150"), Ok(Price::from_minor(15000)));
    }

    #[test]
    fn test_upper_bound_rounds_down_sub_cent_amounts() {
        assert_eq!(Price::upper_bound("100.005"), Ok(Price::from_minor(10000)));
        assert_eq!(Price::upper_bound("100.009"), Ok(Price::from_minor(10000)));
        assert_eq!(Price::upper_bound("0.001"), Ok(Price::ZERO));
        assert_eq!(Price::upper_bound("250.5"), Ok(Price::from_minor(25050)));
    }

    #[test]
    fn test_bounds_reject_what_parse_rejects() {
        assert_eq!(Price::lower_bound("-1"), Err(PriceError::Negative));
        assert_eq!(Price::upper_bound("abc"), Err(PriceError::NotANumber));
        assert_eq!(Price::lower_bound(""), Err(PriceError::Empty));
    }

    #[test]
    fn test_ordering_follows_minor_units() {
        assert!(Price::parse("100").unwrap() < Price::parse("100.01").unwrap());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_value(Price::from_minor(12545)).unwrap();
        assert_eq!(json, serde_json::json!("125.45"));
    }
}
