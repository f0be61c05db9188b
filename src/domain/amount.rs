//! Raw token amount.

use core::fmt;

/// A raw token amount in the smallest indivisible unit of its token.
///
/// `Amount` never interprets decimals; that is the job of
/// [`Decimals`](super::Decimals) and [`Asset`](super::Asset). Every `u64`
/// is a valid amount. Reserves use the same type.
/// Arithmetic on amounts happens in 256 bits (see
/// [`math::widen`](crate::math::widen)); the type itself only carries
/// the value.
///
/// # Examples
///
/// ```
/// use cpmm_pricing::domain::Amount;
///
/// let a = Amount::from(27_328);
/// assert_eq!(a.get(), 27_328);
/// assert!(Amount::ZERO.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[must_use]
pub struct Amount(u64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a new `Amount` from a raw `u64` value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
