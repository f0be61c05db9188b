//! Checked arithmetic over the widened intermediate type.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic that
//! returns [`Result<Self, PricingError>`](crate::error::PricingError)
//! instead of panicking or wrapping.
//!
//! # Examples
//!
//! ```
//! use cpmm_pricing::domain::Rounding;
//! use cpmm_pricing::math::{CheckedArithmetic, U256};
//!
//! let a = U256::from(10u64);
//! let b = U256::from(3u64);
//! assert_eq!(a.safe_div(&b, Rounding::Up), Ok(U256::from(4u64)));
//! assert!(b.safe_sub(&a).is_err());
//! ```

use crate::domain::Rounding;
use crate::error::PricingError;

use super::U256;

/// Fallible arithmetic for the pricing intermediates.
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: errors propagate instead.
/// - Overflow maps to [`PricingError::ArithmeticOverflow`], a negative
///   difference to [`PricingError::ArithmeticUnderflow`], a zero divisor
///   to [`PricingError::DivisionByZero`].
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::ArithmeticOverflow`] if the sum is not
    /// representable.
    fn safe_add(&self, other: &Self) -> Result<Self, PricingError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::ArithmeticUnderflow`] if `other > self`.
    fn safe_sub(&self, other: &Self) -> Result<Self, PricingError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::ArithmeticOverflow`] if the product is not
    /// representable.
    fn safe_mul(&self, other: &Self) -> Result<Self, PricingError>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, PricingError>;
}

impl CheckedArithmetic for U256 {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, PricingError> {
        self.checked_add(*other)
            .ok_or(PricingError::ArithmeticOverflow("wide addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, PricingError> {
        self.checked_sub(*other)
            .ok_or(PricingError::ArithmeticUnderflow("wide subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, PricingError> {
        self.checked_mul(*other)
            .ok_or(PricingError::ArithmeticOverflow("wide multiplication overflow"))
    }

    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, PricingError> {
        if other.is_zero() {
            return Err(PricingError::DivisionByZero);
        }
        let (q, r) = self.div_mod(*other);
        match rounding {
            Rounding::Up if !r.is_zero() => q.safe_add(&U256::one()),
            _ => Ok(q),
        }
    }
}
