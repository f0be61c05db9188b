//! Token decimal places and display conversions.

use crate::error::PricingError;

use super::Amount;

/// Maximum allowed decimal places. `10^18` is the largest power of ten
/// that fits in a `u64` amount.
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places of a token's display representation.
///
/// Valid range is `0..=18`. Construction is validated.
///
/// The conversions here are the only place in the crate that touches
/// floating point. Pricing itself runs on integers only.
///
/// # Examples
///
/// ```
/// use cpmm_pricing::domain::{Amount, Decimals};
///
/// let d = Decimals::new(4).expect("4 is valid");
/// assert_eq!(d.to_scaled(1.2345), Ok(Amount::new(12_345)));
/// assert_eq!(d.to_display(Amount::new(12_345)), 1.2345);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum supported decimal places (18).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, PricingError> {
        if value > MAX_DECIMALS {
            return Err(PricingError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`.
    #[must_use]
    pub const fn factor(&self) -> u64 {
        10u64.pow(self.0 as u32)
    }

    /// Converts a display value to a raw amount: `round(value * 10^decimals)`.
    ///
    /// Halfway cases round away from zero.
    ///
    /// # Errors
    ///
    /// - [`PricingError::InvalidDisplayValue`] if `value` is negative, `NaN`
    ///   or infinite.
    /// - [`PricingError::ArithmeticOverflow`] if the scaled value does not
    ///   fit in a `u64`.
    pub fn to_scaled(&self, value: f64) -> Result<Amount, PricingError> {
        if !value.is_finite() {
            return Err(PricingError::InvalidDisplayValue("value must be finite"));
        }
        if value < 0.0 {
            return Err(PricingError::InvalidDisplayValue("value must not be negative"));
        }
        #[allow(clippy::cast_precision_loss)]
        let scaled = (value * self.factor() as f64).round();
        // u64::MAX as f64 rounds up to 2^64, so anything at or above it is out of range.
        #[allow(clippy::cast_precision_loss)]
        if scaled >= u64::MAX as f64 {
            return Err(PricingError::ArithmeticOverflow("scaled value exceeds u64"));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(Amount::new(scaled as u64))
    }

    /// Converts a raw amount to its display value: `amount / 10^decimals`.
    ///
    /// Zero maps to exactly `0.0`. Amounts above 2^53 lose precision.
    #[must_use]
    pub fn to_display(&self, amount: Amount) -> f64 {
        if amount.is_zero() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let display = amount.get() as f64 / self.factor() as f64;
        display
    }
}

impl TryFrom<u8> for Decimals {
    type Error = PricingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(decimals: Decimals) -> Self {
        decimals.0
    }
}
