//! Fixed-point token amounts.
//!
//! DESIGN
//! ======
//! The CAMPUS token uses two decimals, so amounts are stored as integer
//! hundredths. On the wire they are decimal strings (`"50.00"`); inbound
//! JSON may also carry plain numbers, which are rounded to the nearest
//! hundredth.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of fractional digits carried by an [`Amount`].
pub const DECIMALS: u32 = 2;
const SCALE: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("invalid amount: {0}")]
    Invalid(String),
    #[error("amount has more than {DECIMALS} decimal places: {0}")]
    TooPrecise(String),
    #[error("amount is negative")]
    Negative,
    #[error("amount overflows")]
    Overflow,
}

/// A non-negative token amount with two decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    #[must_use]
    pub const fn from_whole(whole: u64) -> Self {
        Self(whole * SCALE)
    }

    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn whole(self) -> u64 {
        self.0 / SCALE
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// True when the amount has no fractional part.
    #[must_use]
    pub const fn is_whole(self) -> bool {
        self.0 % SCALE == 0
    }

    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_f64(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::Invalid(value.to_string()));
        }
        if value < 0.0 {
            return Err(AmountError::Negative);
        }
        let scaled = (value * 100.0).round();
        if scaled > u64::MAX as f64 {
            return Err(AmountError::Overflow);
        }
        Ok(Self(scaled as u64))
    }
}

/// Percentage of `target` covered by `raised`, floored and capped at 100.
/// A zero target counts as fully funded.
#[must_use]
pub fn progress_percent(raised: Amount, target: Amount) -> u8 {
    if target.is_zero() {
        return 100;
    }
    let pct = u128::from(raised.cents()) * 100 / u128::from(target.cents());
    u8::try_from(pct.min(100)).unwrap_or(100)
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / SCALE, self.0 % SCALE)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(AmountError::Empty);
        }
        if s.starts_with('-') {
            return Err(AmountError::Negative);
        }

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(AmountError::Invalid(raw.to_owned()));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::Invalid(raw.to_owned()));
        }
        if frac.len() > DECIMALS as usize {
            return Err(AmountError::TooPrecise(raw.to_owned()));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| AmountError::Overflow)?
        };
        let mut frac_cents: u64 = if frac.is_empty() { 0 } else { frac.parse().map_err(|_| AmountError::Invalid(raw.to_owned()))? };
        if frac.len() == 1 {
            frac_cents *= 10;
        }

        whole
            .checked_mul(SCALE)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Self)
            .ok_or(AmountError::Overflow)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

struct AmountVisitor;

impl Visitor<'_> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative decimal amount as a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        v.checked_mul(SCALE)
            .map(Amount)
            .ok_or_else(|| E::custom(AmountError::Overflow))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        u64::try_from(v)
            .map_err(|_| E::custom(AmountError::Negative))
            .and_then(|v| self.visit_u64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        Amount::from_f64(v).map_err(E::custom)
    }
}

#[cfg(test)]
#[path = "amount_test.rs"]
mod tests;
