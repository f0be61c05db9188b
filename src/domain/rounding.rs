//! Explicit rounding direction for integer division.

/// Rounding direction for a division whose remainder is non-zero.
///
/// Every division in the pricing path names its direction. Outputs paid
/// by the pool round [`Down`](Self::Down); inputs demanded from the
/// trader round [`Up`](Self::Up), so rounding never moves value out of
/// the pool.
///
/// # Examples
///
/// ```
/// use cpmm_pricing::domain::Rounding;
/// use cpmm_pricing::math::{CheckedArithmetic, U256};
///
/// let ten = U256::from(10u64);
/// let three = U256::from(3u64);
/// assert_eq!(ten.safe_div(&three, Rounding::Down), Ok(U256::from(3u64)));
/// assert_eq!(ten.safe_div(&three, Rounding::Up), Ok(U256::from(4u64)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}
