//! Constant-product pricing functions (Uniswap V2 style).
//!
//! The pool invariant is `reserve_in × reserve_out = k`. Three pure
//! functions price against it:
//!
//! | Function | Question answered | Rounding |
//! |----------|-------------------|----------|
//! | [`quote`] | What is `amount_a` worth in B at the current ratio? | floor |
//! | [`get_amount_out`] | How much B does selling `amount_in` of A yield? | floor |
//! | [`get_amount_in`] | How much A must be sold to receive `amount_out` of B? | floor + 1 (ceiling with a protocol fee) |
//!
//! Every intermediate is computed in [`U256`]; only the final value is
//! narrowed back to an [`Amount`], and that step is range-checked.
//!
//! # Fee application
//!
//! With `den` the fee denominator, `t` the trading fee and `p` the
//! protocol fee from [`FeeConfig`]:
//!
//! ```text
//! adjusted_in = floor(amount_in × (den − p) / den)          (skipped when p = 0)
//! with_fee    = adjusted_in × (den − t)
//! amount_out  = floor(with_fee × reserve_out / (reserve_in × den + with_fee))
//!
//! ratio       = reserve_in × amount_out × den / ((reserve_out − amount_out) × (den − t))
//! amount_in   = floor(ratio) + 1                            (p = 0)
//! amount_in   = ceil(ceil(ratio) × den / (den − p))         (p > 0)
//! ```
//!
//! The trading fee is folded into the main fraction rather than applied
//! as a separate truncating step.
//!
//! # Round trip
//!
//! `get_amount_out(get_amount_in(x)) >= x` for every valid input and
//! every [`FeeConfig`]. The reverse direction satisfies
//! `get_amount_in(get_amount_out(x)) <= x + 1`: without a protocol fee
//! the Uniswap V2 `+ 1` correction overshoots by one when the forward
//! division was exact. With a protocol fee the inverse is the exact
//! minimum input, so the bound tightens to `<= x`.
//!
//! # Examples
//!
//! ```
//! use cpmm_pricing::config::FeeConfig;
//! use cpmm_pricing::domain::Amount;
//! use cpmm_pricing::pricing::{get_amount_in, get_amount_out, quote};
//!
//! let reserve_in = Amount::new(45_851_931_234);
//! let reserve_out = Amount::new(125_682_033_533);
//! let fees = FeeConfig::UNISWAP_V2;
//!
//! let out = get_amount_out(Amount::new(10_000), reserve_in, reserve_out, &fees)?;
//! assert_eq!(out, Amount::new(27_328));
//!
//! let back = get_amount_in(out, reserve_in, reserve_out, &fees)?;
//! assert_eq!(back, Amount::new(10_000));
//!
//! assert_eq!(quote(Amount::new(10_000), reserve_in, reserve_out)?, Amount::new(27_410));
//! # Ok::<(), cpmm_pricing::error::PricingError>(())
//! ```

use tracing::{debug, trace};

use crate::config::FeeConfig;
use crate::domain::{Amount, Rounding};
use crate::error::{PricingError, Result};
use crate::math::{narrow, widen, widen_u32, CheckedArithmetic, U256};

#[cfg(test)]
mod proptest_properties;

/// Rejects a pool with an empty side.
fn ensure_liquidity(op: &'static str, reserve_a: Amount, reserve_b: Amount) -> Result<()> {
    if reserve_a.is_zero() || reserve_b.is_zero() {
        debug!(op, %reserve_a, %reserve_b, "rejected: empty reserve");
        return Err(PricingError::InsufficientLiquidity);
    }
    Ok(())
}

/// Returns the amount of token B equivalent to `amount_a` of token A at
/// the pool's current ratio: `floor(amount_a × reserve_b / reserve_a)`.
///
/// No fee is applied; this prices liquidity deposits, not trades.
///
/// # Errors
///
/// - [`PricingError::InsufficientAmount`] if `amount_a` is zero.
/// - [`PricingError::InsufficientLiquidity`] if either reserve is zero.
/// - [`PricingError::ArithmeticOverflow`] if the result exceeds `u64`.
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
    if amount_a.is_zero() {
        debug!(op = "quote", "rejected: zero amount");
        return Err(PricingError::InsufficientAmount);
    }
    ensure_liquidity("quote", reserve_a, reserve_b)?;

    let amount_b = widen(amount_a)
        .safe_mul(&widen(reserve_b))?
        .safe_div(&widen(reserve_a), Rounding::Down)
        .and_then(narrow)
        .inspect_err(|e| {
            debug!(op = "quote", %amount_a, %reserve_a, %reserve_b, error = %e, "failed");
        })?;

    trace!(%amount_a, %reserve_a, %reserve_b, %amount_b, "quote");
    Ok(amount_b)
}

/// Returns the maximum output for selling `amount_in` into the pool,
/// net of the protocol and trading fees in `fees`.
///
/// The result is floored, so the pool's `k` never decreases. A result of
/// zero is returned as `Ok(Amount::ZERO)`; the input was valid but too
/// small to buy a single unit.
///
/// # Errors
///
/// - [`PricingError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`PricingError::InsufficientLiquidity`] if either reserve is zero.
/// - [`PricingError::ArithmeticOverflow`] if the result exceeds `u64`
///   (unreachable in practice: the output is always below `reserve_out`).
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fees: &FeeConfig,
) -> Result<Amount> {
    if amount_in.is_zero() {
        debug!(op = "get_amount_out", "rejected: zero input");
        return Err(PricingError::InsufficientInputAmount);
    }
    ensure_liquidity("get_amount_out", reserve_in, reserve_out)?;

    let amount_out = amount_out_wide(amount_in, reserve_in, reserve_out, fees)
        .and_then(narrow)
        .inspect_err(|e| {
            debug!(op = "get_amount_out", %amount_in, %reserve_in, %reserve_out, error = %e, "failed");
        })?;

    trace!(%amount_in, %reserve_in, %reserve_out, %fees, %amount_out, "get_amount_out");
    Ok(amount_out)
}

fn amount_out_wide(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fees: &FeeConfig,
) -> Result<U256> {
    let den = widen_u32(fees.denominator());

    let adjusted_in = if fees.has_protocol_fee() {
        widen(amount_in)
            .safe_mul(&widen_u32(fees.protocol_multiplier()))?
            .safe_div(&den, Rounding::Down)?
    } else {
        widen(amount_in)
    };

    let with_fee = adjusted_in.safe_mul(&widen_u32(fees.trade_multiplier()))?;
    let numerator = with_fee.safe_mul(&widen(reserve_out))?;
    let denominator = widen(reserve_in).safe_mul(&den)?.safe_add(&with_fee)?;

    numerator.safe_div(&denominator, Rounding::Down)
}

/// Returns the minimum input that buys exactly `amount_out` from the pool
/// under `fees`.
///
/// Without a protocol fee the inverse formula is floored and then
/// corrected by `+ 1`, matching Uniswap V2 bit for bit. With a protocol
/// fee the net input is rounded up and grossed up by
/// `den / (den − protocol_fee)`, again rounding up; the result is then
/// the smallest input that buys `amount_out`. Either way, feeding the
/// result back into [`get_amount_out`] never yields less than
/// `amount_out`.
///
/// # Errors
///
/// - [`PricingError::InsufficientOutputAmount`] if `amount_out` is zero.
/// - [`PricingError::InsufficientLiquidity`] if either reserve is zero.
/// - [`PricingError::ArithmeticUnderflow`] if `amount_out` is not strictly
///   below `reserve_out`.
/// - [`PricingError::ArithmeticOverflow`] if the result exceeds `u64`.
pub fn get_amount_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fees: &FeeConfig,
) -> Result<Amount> {
    if amount_out.is_zero() {
        debug!(op = "get_amount_in", "rejected: zero output");
        return Err(PricingError::InsufficientOutputAmount);
    }
    ensure_liquidity("get_amount_in", reserve_in, reserve_out)?;

    let amount_in = amount_in_wide(amount_out, reserve_in, reserve_out, fees)
        .and_then(narrow)
        .inspect_err(|e| {
            debug!(op = "get_amount_in", %amount_out, %reserve_in, %reserve_out, error = %e, "failed");
        })?;

    trace!(%amount_out, %reserve_in, %reserve_out, %fees, %amount_in, "get_amount_in");
    Ok(amount_in)
}

fn amount_in_wide(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fees: &FeeConfig,
) -> Result<U256> {
    let den = widen_u32(fees.denominator());

    let remaining = widen(reserve_out).safe_sub(&widen(amount_out))?;
    if remaining.is_zero() {
        return Err(PricingError::ArithmeticUnderflow(
            "amount out would drain the output reserve",
        ));
    }

    let numerator = widen(reserve_in)
        .safe_mul(&widen(amount_out))?
        .safe_mul(&den)?;
    let denominator = remaining.safe_mul(&widen_u32(fees.trade_multiplier()))?;

    if !fees.has_protocol_fee() {
        return numerator
            .safe_div(&denominator, Rounding::Down)?
            .safe_add(&U256::one());
    }

    // Smallest net input, then smallest gross input whose protocol cut leaves it.
    numerator
        .safe_div(&denominator, Rounding::Up)?
        .safe_mul(&den)?
        .safe_div(&widen_u32(fees.protocol_multiplier()), Rounding::Up)
}
