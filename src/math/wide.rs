//! 256-bit intermediate integer and the widen/narrow boundary.
//!
//! Pricing inputs are 64-bit and fee parameters 32-bit, so the largest
//! product any formula builds (`reserve × amount × denominator`) needs
//! at most 160 bits. Working in 256 bits means the checked primitives
//! never trip on valid inputs; the only place a result can fall out of
//! range is [`narrow`].

use uint::construct_uint;

use crate::domain::Amount;
use crate::error::PricingError;

construct_uint! {
    /// 256-bit unsigned integer used for every pricing intermediate.
    pub struct U256(4);
}

/// Widens an [`Amount`] into the intermediate domain.
#[inline]
#[must_use]
pub fn widen(amount: Amount) -> U256 {
    U256::from(amount.get())
}

/// Widens a fee parameter into the intermediate domain.
#[inline]
#[must_use]
pub fn widen_u32(value: u32) -> U256 {
    U256::from(value)
}

/// Narrows an intermediate back to an [`Amount`], range-checked.
///
/// # Errors
///
/// Returns [`PricingError::ArithmeticOverflow`] if `value` exceeds `u64::MAX`.
#[inline]
pub fn narrow(value: U256) -> Result<Amount, PricingError> {
    if value > U256::from(u64::MAX) {
        return Err(PricingError::ArithmeticOverflow("result exceeds u64 range"));
    }
    Ok(Amount::new(value.low_u64()))
}
