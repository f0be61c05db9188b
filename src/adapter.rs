//! Asset-level pricing.
//!
//! Thin wrappers over [`crate::pricing`] for callers that carry amounts
//! as [`Asset`]s. Symbols are checked up front, then the raw amounts go
//! through the integer functions unchanged; floating point never enters
//! the pricing path.
//!
//! ```
//! use cpmm_pricing::adapter;
//! use cpmm_pricing::config::FeeConfig;
//! use cpmm_pricing::domain::{Asset, Symbol};
//!
//! let eos = Symbol::parse("EOS", 4)?;
//! let usdt = Symbol::parse("USDT", 4)?;
//!
//! let reserve_eos = Asset::from_display(10_000.0, eos)?;
//! let reserve_usdt = Asset::from_display(40_000.0, usdt)?;
//! let sell = Asset::from_display(1.0, eos)?;
//!
//! let out = adapter::get_amount_out(sell, reserve_eos, reserve_usdt, &FeeConfig::UNISWAP_V2)?;
//! assert_eq!(out.to_string(), "3.9876 USDT");
//! # Ok::<(), cpmm_pricing::error::PricingError>(())
//! ```

use tracing::debug;

use crate::config::FeeConfig;
use crate::domain::Asset;
use crate::error::{PricingError, Result};
use crate::pricing;

/// Checks that `amount` is denominated in `reserve`'s symbol and that the
/// two reserves belong to different assets.
fn check_pair(op: &'static str, amount: &Asset, reserve: &Asset, other: &Asset) -> Result<()> {
    if amount.symbol() != reserve.symbol() {
        debug!(op, amount = %amount.symbol(), reserve = %reserve.symbol(), "rejected: symbol mismatch");
        return Err(PricingError::SymbolMismatch);
    }
    if reserve.symbol().code() == other.symbol().code() {
        debug!(op, code = %reserve.symbol().code(), "rejected: identical assets");
        return Err(PricingError::IdenticalAssets);
    }
    Ok(())
}

/// Asset form of [`pricing::quote`]. The result is in `reserve_b`'s symbol.
///
/// # Errors
///
/// - [`PricingError::SymbolMismatch`] if `amount_a` is not in `reserve_a`'s symbol.
/// - [`PricingError::IdenticalAssets`] if both reserves share a symbol code.
/// - Any error of [`pricing::quote`].
pub fn quote(amount_a: Asset, reserve_a: Asset, reserve_b: Asset) -> Result<Asset> {
    check_pair("quote", &amount_a, &reserve_a, &reserve_b)?;
    let amount_b = pricing::quote(amount_a.amount(), reserve_a.amount(), reserve_b.amount())?;
    Ok(Asset::new(amount_b, reserve_b.symbol()))
}

/// Asset form of [`pricing::get_amount_out`]. The result is in
/// `reserve_out`'s symbol.
///
/// # Errors
///
/// - [`PricingError::SymbolMismatch`] if `amount_in` is not in `reserve_in`'s symbol.
/// - [`PricingError::IdenticalAssets`] if both reserves share a symbol code.
/// - Any error of [`pricing::get_amount_out`].
pub fn get_amount_out(
    amount_in: Asset,
    reserve_in: Asset,
    reserve_out: Asset,
    fees: &FeeConfig,
) -> Result<Asset> {
    check_pair("get_amount_out", &amount_in, &reserve_in, &reserve_out)?;
    let amount_out = pricing::get_amount_out(
        amount_in.amount(),
        reserve_in.amount(),
        reserve_out.amount(),
        fees,
    )?;
    Ok(Asset::new(amount_out, reserve_out.symbol()))
}

/// Asset form of [`pricing::get_amount_in`]. The result is in
/// `reserve_in`'s symbol.
///
/// # Errors
///
/// - [`PricingError::SymbolMismatch`] if `amount_out` is not in `reserve_out`'s symbol.
/// - [`PricingError::IdenticalAssets`] if both reserves share a symbol code.
/// - Any error of [`pricing::get_amount_in`].
pub fn get_amount_in(
    amount_out: Asset,
    reserve_in: Asset,
    reserve_out: Asset,
    fees: &FeeConfig,
) -> Result<Asset> {
    check_pair("get_amount_in", &amount_out, &reserve_out, &reserve_in)?;
    let amount_in = pricing::get_amount_in(
        amount_out.amount(),
        reserve_in.amount(),
        reserve_out.amount(),
        fees,
    )?;
    Ok(Asset::new(amount_in, reserve_in.symbol()))
}
