//! Convenience re-exports for common types and functions.
//!
//! ```rust
//! use cpmm_pricing::prelude::*;
//!
//! let out = get_amount_out(
//!     Amount::new(10_000),
//!     Amount::new(100_000_000),
//!     Amount::new(400_000_000),
//!     &FeeConfig::UNISWAP_V2,
//! )?;
//! assert_eq!(out, Amount::new(39_876));
//! # Ok::<(), PricingError>(())
//! ```

pub use crate::config::{FeeConfig, BPS_DENOMINATOR};
pub use crate::domain::{Amount, Asset, Decimals, Rounding, Symbol, SymbolCode};
pub use crate::error::{PricingError, Result};
pub use crate::math::CheckedArithmetic;
pub use crate::pricing::{get_amount_in, get_amount_out, quote};
