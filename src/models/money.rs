//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so totals never drift. On disk an
//! amount is a plain JSON number in currency units (`42.5`).
//!
//! A single amount is capped at [`Money::MAX`] so that sums of any realistic
//! number of expenses stay well inside `i64`. Addition saturates regardless.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from input or from the data file ($999,999,999.99)
    pub const MAX: Money = Money(99_999_999_999);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_recorder::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount in currency units, for charting
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Share of `total` this amount represents, as a percentage
    pub fn percentage_of(&self, total: Money) -> f64 {
        if total.is_zero() {
            0.0
        } else {
            self.0 as f64 / total.0 as f64 * 100.0
        }
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", ".5".
    /// Amounts are rounded half-up to the nearest cent, and anything beyond
    /// [`Money::MAX`] in either direction is out of range.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        if input.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (negative, rest) = match input.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, input),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (dollars_str, cents_str) = match rest.split_once('.') {
            Some((d, c)) => (d, c),
            None => (rest, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(dollars_str) || !all_digits(cents_str) {
            return Err(invalid());
        }
        if dollars_str.is_empty() && cents_str.is_empty() {
            return Err(invalid());
        }

        // Only digits remain, so a failed parse means the number is too long
        let dollars: i64 = if dollars_str.is_empty() {
            0
        } else {
            dollars_str.parse().map_err(|_| MoneyParseError::OutOfRange)?
        };

        let mut cents: i64 = match cents_str.len() {
            0 => 0,
            1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => cents_str[..2].parse().map_err(|_| invalid())?,
        };
        if cents_str.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
            cents += 1;
        }

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .filter(|t| *t <= Self::MAX.0)
            .ok_or(MoneyParseError::OutOfRange)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        // Shortest decimal form of the float, so stored and typed amounts
        // go through the same rounding and range rules
        Money::parse(&value.to_string())
            .map_err(|e| serde::de::Error::custom(format!("invalid amount {}: {}", value, e)))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    OutOfRange,
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "No amount entered"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
            MoneyParseError::OutOfRange => write!(f, "Amount is too large"),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(4250).to_string(), "$42.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(1050).format_with_symbol("€"), "€10.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("$42.50").unwrap().cents(), 4250);
        assert_eq!(Money::parse("  7.25 ").unwrap().cents(), 725);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("3.999").unwrap().cents(), 400);
        assert_eq!(Money::parse("3.994").unwrap().cents(), 399);
        assert_eq!(Money::parse("3.995").unwrap().cents(), 400);
        assert_eq!(Money::parse("-5").unwrap().cents(), -500);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1.-5").is_err());
    }

    #[test]
    fn test_parse_enforces_maximum() {
        assert_eq!(Money::parse("999999999.99"), Ok(Money::MAX));
        assert_eq!(Money::parse("999999999.995"), Err(MoneyParseError::OutOfRange));
        assert_eq!(Money::parse("1000000000"), Err(MoneyParseError::OutOfRange));
        assert_eq!(Money::parse("90000000000000000"), Err(MoneyParseError::OutOfRange));
        assert_eq!(Money::parse("99999999999999999999"), Err(MoneyParseError::OutOfRange));
        assert_eq!(Money::parse("-1000000000"), Err(MoneyParseError::OutOfRange));
    }

    #[test]
    fn test_addition_saturates() {
        let big = Money::from_cents(i64::MAX - 10);
        assert_eq!((big + Money::from_cents(100)).cents(), i64::MAX);

        let mut total = big;
        total += big;
        assert_eq!(total.cents(), i64::MAX);

        let sum: Money = [big, big, big].iter().sum();
        assert_eq!(sum.cents(), i64::MAX);
    }

    #[test]
    fn test_serializes_as_decimal_number() {
        let json = serde_json::to_string(&Money::from_cents(4250)).unwrap();
        assert_eq!(json, "42.5");

        let m: Money = serde_json::from_str("42.5").unwrap();
        assert_eq!(m.cents(), 4250);

        let m: Money = serde_json::from_str("12").unwrap();
        assert_eq!(m.cents(), 1200);

        // Float noise from other writers rounds to the nearest cent
        let m: Money = serde_json::from_str("0.30000000000000004").unwrap();
        assert_eq!(m.cents(), 30);
        let m: Money = serde_json::from_str("0.29").unwrap();
        assert_eq!(m.cents(), 29);
    }

    #[test]
    fn test_stored_and_typed_amounts_round_alike() {
        let stored: Money = serde_json::from_str("3.999").unwrap();
        assert_eq!(stored, Money::parse("3.999").unwrap());
        assert_eq!(stored.cents(), 400);
    }

    #[test]
    fn test_deserialize_rejects_huge_amounts() {
        assert!(serde_json::from_str::<Money>("90000000000000000").is_err());
        assert!(serde_json::from_str::<Money>("1e300").is_err());
    }

    #[test]
    fn test_sum_and_percentage() {
        let amounts = [Money::from_cents(250), Money::from_cents(750)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 1000);
        assert_eq!(amounts[0].percentage_of(total), 25.0);
        assert_eq!(amounts[0].percentage_of(Money::zero()), 0.0);
    }
}
