//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths (i64) to avoid floating-point
//! drift while summing. Provides arithmetic and the two formatting styles
//! the reports use: fixed two-decimal table cells and grouped summary values.
//!
//! `Money` has no serde impls of its own; every serialized amount goes
//! through [`decimal`] so JSON always carries whole-unit numbers.

use std::fmt;
use std::ops::{Add, AddAssign};

/// Largest magnitude a single stored amount may have, in hundredths
///
/// Ten trillion currency units. Keeps every hundredths count below 2^53.
pub const MAX_AMOUNT_CENTS: i64 = 1_000_000_000_000_000;

/// Represents a monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use family_expense::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a floating-point value
    ///
    /// Rounds half away from zero to the nearest hundredth, which is how the
    /// expense store's JSON numbers map onto exact amounts. Returns `None`
    /// for non-finite values and anything beyond [`MAX_AMOUNT_CENTS`].
    pub fn try_from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_AMOUNT_CENTS as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the hundredths portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, returning `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Sum of magnitudes, or `None` if it does not fit in an `i64`
    ///
    /// When this succeeds, no subset of `amounts` can overflow when added
    /// in any order.
    pub fn checked_magnitude_sum<'a, I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        amounts.into_iter().try_fold(Self::zero(), |acc, m| {
            acc.checked_add(Self(m.0.checked_abs()?))
        })
    }

    /// Convert to a floating-point value in whole units
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Divide by a positive count, rounding half away from zero
    ///
    /// Returns `None` when `divisor` is not positive.
    pub fn divide_rounded(&self, divisor: i64) -> Option<Self> {
        if divisor <= 0 {
            return None;
        }
        let quotient = self.0 / divisor;
        let remainder = self.0 % divisor;
        let rounded = if remainder.abs() * 2 >= divisor {
            quotient + self.0.signum()
        } else {
            quotient
        };
        Some(Self(rounded))
    }

    /// Format as a table cell: exactly two decimals, no grouping
    pub fn format_fixed(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }

    /// Format with thousands separators, dropping trailing zero decimals
    ///
    /// `123456` cents renders as `1,234.56`, `123450` as `1,234.5` and
    /// `123400` as `1,234`.
    pub fn format_grouped(&self) -> String {
        let digits = self.units().abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let fraction = match self.cents_part() {
            0 => String::new(),
            c if c % 10 == 0 => format!(".{}", c / 10),
            c => format!(".{:02}", c),
        };

        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, grouped, fraction)
    }

    /// Format grouped with a leading currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.format_grouped())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_fixed())
    }
}

/// Unchecked addition
///
/// Snapshots verify with [`Money::checked_magnitude_sum`] that their amounts
/// cannot overflow, so report aggregation adds freely.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Serde adapter for amounts stored as decimal JSON numbers
///
/// The expense store keeps `amount` as a plain number (`12.5`), not as
/// hundredths. Report outputs use the same representation.
pub mod decimal {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(amount: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(amount.to_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Money::try_from_f64(value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "amount {} is outside the supported range (at most {} in magnitude)",
                value,
                super::MAX_AMOUNT_CENTS / 100
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_f64_rounds_to_cents() {
        assert_eq!(Money::try_from_f64(12.5).unwrap().cents(), 1250);
        assert_eq!(Money::try_from_f64(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::try_from_f64(-4.25).unwrap().cents(), -425);
    }

    #[test]
    fn test_from_f64_rejects_out_of_range() {
        assert_eq!(Money::try_from_f64(1e17), None);
        assert_eq!(Money::try_from_f64(-1e17), None);
        assert_eq!(Money::try_from_f64(f64::NAN), None);
        assert_eq!(Money::try_from_f64(f64::INFINITY), None);
        assert_eq!(
            Money::try_from_f64(1e13),
            Some(Money::from_cents(MAX_AMOUNT_CENTS))
        );
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(Money::from_cents(123450).format_fixed(), "1234.50");
        assert_eq!(Money::from_cents(0).format_fixed(), "0.00");
        assert_eq!(Money::from_cents(-1205).format_fixed(), "-12.05");
        assert_eq!(Money::from_cents(-5).format_fixed(), "-0.05");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(Money::from_cents(123456).format_grouped(), "1,234.56");
        assert_eq!(Money::from_cents(123450).format_grouped(), "1,234.5");
        assert_eq!(Money::from_cents(123400).format_grouped(), "1,234");
        assert_eq!(Money::from_cents(100000000).format_grouped(), "1,000,000");
        assert_eq!(Money::zero().format_grouped(), "0");
        assert_eq!(Money::from_cents(-250000).format_grouped(), "-2,500");
        assert_eq!(Money::from_cents(35000).format_with_symbol("₹"), "₹350");
    }

    #[test]
    fn test_divide_rounded() {
        assert_eq!(Money::from_cents(1000).divide_rounded(3), Some(Money::from_cents(333)));
        assert_eq!(Money::from_cents(1001).divide_rounded(2), Some(Money::from_cents(501)));
        assert_eq!(Money::from_cents(-1001).divide_rounded(2), Some(Money::from_cents(-501)));
        assert_eq!(Money::from_cents(100).divide_rounded(0), None);
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_checked_magnitude_sum() {
        let mixed = [Money::from_cents(-300), Money::from_cents(200)];
        assert_eq!(Money::checked_magnitude_sum(&mixed), Some(Money::from_cents(500)));

        let huge = [Money::from_cents(i64::MAX / 2 + 1), Money::from_cents(-(i64::MAX / 2 + 1))];
        assert_eq!(Money::checked_magnitude_sum(&huge), None);
        assert_eq!(Money::checked_magnitude_sum(&[Money::from_cents(i64::MIN)]), None);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
    }

    #[derive(Debug, serde::Serialize, serde::Deserialize)]
    struct Amount {
        #[serde(with = "super::decimal")]
        value: Money,
    }

    #[test]
    fn test_decimal_serialization() {
        let json = serde_json::to_string(&Amount { value: Money::from_cents(1050) }).unwrap();
        assert_eq!(json, r#"{"value":10.5}"#);

        let parsed: Amount = serde_json::from_str(r#"{"value": 85.5}"#).unwrap();
        assert_eq!(parsed.value, Money::from_cents(8550));
    }

    #[test]
    fn test_decimal_rejects_out_of_range_amount() {
        let err = serde_json::from_str::<Amount>(r#"{"value": 1e17}"#).unwrap_err();
        assert!(err.to_string().contains("outside the supported range"));
    }
}
