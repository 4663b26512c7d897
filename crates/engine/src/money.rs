use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};
use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Signed money amount backed by a [`Decimal`].
///
/// Use this type for **all** monetary values in the engine (expense amounts,
/// totals, shares, transfers) to avoid floating-point drift. Amounts are
/// unit-less: the currency only matters when a value is displayed.
///
/// Intermediate values (e.g. an equal share of `100 / 3`) keep the full
/// decimal precision; rounding to cents only happens in [`Money::round_cents`]
/// and `Display`.
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::from_minor(12_34);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects >
/// 2 decimals):
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("10".parse::<Money>().unwrap(), Money::from_minor(1000));
/// assert_eq!("10,5".parse::<Money>().unwrap(), Money::from_minor(1050));
/// assert!("12.345".parse::<Money>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// One minor currency unit (`0.01`).
    pub const CENT: Money = Money(Decimal::from_parts(1, 0, 0, false, 2));

    /// Wraps an arbitrary decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates an amount from integer minor units (cents).
    #[must_use]
    pub fn from_minor(minor: i64) -> Self {
        Self(Decimal::new(minor, 2))
    }

    /// Converts a float coming from a foreign source (e.g. a JSON number).
    ///
    /// Fails with [`EngineError::InvalidInput`] for `NaN` and infinities, and for
    /// values outside the decimal range.
    pub fn try_from_f64(value: f64) -> Result<Self, EngineError> {
        if !value.is_finite() {
            return Err(EngineError::InvalidInput(format!(
                "amount must be a finite number, got {value}"
            )));
        }
        Decimal::from_f64(value)
            .map(|amount| Self(amount.normalize()))
            .ok_or_else(|| EngineError::InvalidInput(format!("amount out of range: {value}")))
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Checked subtraction (returns `None` on overflow).
    #[must_use]
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// Splits the amount into `parts` equal shares, keeping full precision.
    ///
    /// Returns `None` when `parts` is 0.
    #[must_use]
    pub fn split(self, parts: usize) -> Option<Money> {
        if parts == 0 {
            return None;
        }
        self.0.checked_div(Decimal::from(parts)).map(Money)
    }

    /// Rounds half away from zero to two decimals.
    #[must_use]
    pub fn round_cents(self) -> Money {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            rounded = Decimal::ZERO;
        }
        rounded.rescale(2);
        Money(rounded)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.round_cents().0)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, value| acc + value)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl FromStr for Money {
    type Err = EngineError;

    /// Parses a decimal string typed by a user.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidInput("empty amount".to_string());
        let invalid = || EngineError::InvalidInput(format!("invalid amount: {}", s.trim()));
        let overflow = || EngineError::InvalidInput("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', ".");
        let mut parts = rest.split('.');
        let units_str = parts.next().ok_or_else(invalid)?;
        let fraction_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: i64 = units_str.parse().map_err(|_| overflow())?;

        let cents: i64 = match fraction_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => {
                        return Err(EngineError::InvalidInput(
                            "too many decimals".to_string(),
                        ));
                    }
                }
            }
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(overflow)?;

        let signed = if negative {
            total.checked_neg().ok_or_else(overflow)?
        } else {
            total
        };

        Ok(Money::from_minor(signed))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn display_rounds_to_cents() {
        assert_eq!(Money::from_minor(0).to_string(), "0.00");
        assert_eq!(Money::from_minor(1).to_string(), "0.01");
        assert_eq!(Money::from_minor(10).to_string(), "0.10");
        assert_eq!(Money::from_minor(1050).to_string(), "10.50");
        assert_eq!(Money::from_minor(-1050).to_string(), "-10.50");
        assert_eq!(Money::new(dec!(20)).to_string(), "20.00");
        assert_eq!(Money::new(dec!(0.005)).to_string(), "0.01");
        assert_eq!(Money::new(dec!(-0.001)).to_string(), "0.00");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<Money>().unwrap(), Money::from_minor(1000));
        assert_eq!("10.5".parse::<Money>().unwrap(), Money::from_minor(1050));
        assert_eq!("10,50".parse::<Money>().unwrap(), Money::from_minor(1050));
        assert_eq!("-0.01".parse::<Money>().unwrap(), Money::from_minor(-1));
        assert_eq!("+1.00".parse::<Money>().unwrap(), Money::from_minor(100));
        assert_eq!("  2.30 ".parse::<Money>().unwrap(), Money::from_minor(230));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("12.345".parse::<Money>().is_err());
        assert!("0.001".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
        assert!("-".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("NaN".parse::<Money>().is_err());
    }

    #[test]
    fn float_conversion_rejects_non_finite() {
        assert!(Money::try_from_f64(f64::NAN).is_err());
        assert!(Money::try_from_f64(f64::INFINITY).is_err());
        assert!(Money::try_from_f64(f64::NEG_INFINITY).is_err());
        assert_eq!(Money::try_from_f64(12.5).unwrap(), Money::new(dec!(12.5)));
        assert_eq!(Money::try_from_f64(30.0).unwrap(), Money::new(dec!(30)));
    }

    #[test]
    fn split_keeps_precision() {
        let share = Money::new(dec!(100)).split(3).unwrap();
        assert_eq!(share.round_cents(), Money::new(dec!(33.33)));
        assert!(Money::new(dec!(100)).split(0).is_none());
        assert_eq!(Money::new(dec!(60)).split(3).unwrap(), Money::new(dec!(20)));
    }

    #[test]
    fn sum_of_amounts() {
        let amounts = [Money::from_minor(1000), Money::from_minor(250)];
        assert_eq!(amounts.iter().sum::<Money>(), Money::from_minor(1250));
        assert_eq!(Vec::<Money>::new().into_iter().sum::<Money>(), Money::ZERO);
    }
}
