//! Value objects: equality by value, not identity.

use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects have **no identity**; they are defined entirely by their
/// attribute values and are immutable once built. To "modify" one, build a
/// new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A non-negative monetary amount in the smallest currency unit (cents).
///
/// Integer cents keep aggregate values exact: `200 × $89.99` is exactly
/// `$17998.00`, with no floating-point drift.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Parse a decimal dollar amount such as `"89.99"` or `"12"`.
    pub fn parse_dollars(s: &str) -> DomainResult<Self> {
        let s = s.trim();
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || frac.len() > 2 || !all_digits(whole) || !all_digits(frac) {
            return Err(DomainError::validation(format!("invalid amount: {s:?}")));
        }

        let whole: u64 = whole
            .parse()
            .map_err(|_| DomainError::validation(format!("invalid amount: {s:?}")))?;
        let frac: u64 = match frac.len() {
            0 => Ok(0),
            1 => frac.parse::<u64>().map(|d| d * 10),
            _ => frac.parse::<u64>(),
        }
        .map_err(|_| DomainError::validation(format!("invalid amount: {s:?}")))?;

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .map(Self)
            .ok_or_else(|| DomainError::validation(format!("amount out of range: {s:?}")))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Price of `quantity` units at this unit price (saturating).
    pub fn times(self, quantity: u64) -> Self {
        Self(self.0.saturating_mul(quantity))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Renders as `$<dollars>.<cents>`, e.g. `$17998.00`.
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}
