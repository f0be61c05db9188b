//! Overflow-safe arithmetic for pricing calculations.
//!
//! All pricing formulas follow the same path: [`widen`] the 64-bit
//! inputs into [`U256`], combine them with the [`CheckedArithmetic`]
//! primitives, then [`narrow`] the final quotient back to an
//! [`Amount`](crate::domain::Amount) with a range check.

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{narrow, widen, widen_u32, U256};
