//! Amount paired with the symbol that gives it meaning.

use core::fmt;

use super::{Amount, Symbol};
use crate::error::PricingError;

/// A quantity of a specific asset: raw [`Amount`] plus its [`Symbol`].
///
/// This is the "quantity + symbol precision" model used by callers that
/// think in display units. The raw amount is what pricing operates on.
///
/// # Examples
///
/// ```
/// use cpmm_pricing::domain::{Amount, Asset, Symbol};
///
/// let eos = Symbol::parse("EOS", 4).expect("valid symbol");
/// let one = Asset::new(Amount::new(10_000), eos);
/// assert_eq!(one.to_string(), "1.0000 EOS");
/// assert_eq!(one.to_display(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Asset {
    amount: Amount,
    symbol: Symbol,
}

impl Asset {
    /// Creates a new `Asset`.
    #[must_use]
    pub const fn new(amount: Amount, symbol: Symbol) -> Self {
        Self { amount, symbol }
    }

    /// Builds an asset from a display value such as `1.2345`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Decimals::to_scaled`](super::Decimals::to_scaled).
    pub fn from_display(value: f64, symbol: Symbol) -> Result<Self, PricingError> {
        let amount = symbol.precision().to_scaled(value)?;
        Ok(Self::new(amount, symbol))
    }

    /// Returns the raw amount.
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns the symbol.
    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the display value (`amount / 10^precision`).
    #[must_use]
    pub fn to_display(&self) -> f64 {
        self.symbol.precision().to_display(self.amount)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.symbol.precision();
        let code = self.symbol.code();
        if precision.get() == 0 {
            return write!(f, "{} {code}", self.amount);
        }
        let factor = precision.factor();
        let whole = self.amount.get() / factor;
        let frac = self.amount.get() % factor;
        let width = usize::from(precision.get());
        write!(f, "{whole}.{frac:0width$} {code}")
    }
}
