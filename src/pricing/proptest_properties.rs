//! Property-based tests for the pricing functions.
//!
//! 1. **Monotonicity**: more in gives at least as much out; more out
//!    costs at least as much in.
//! 2. **Round trip**: `get_amount_out(get_amount_in(y)) >= y`, and
//!    `get_amount_in(get_amount_out(x)) <= x` (`x + 1` on exact division
//!    without a protocol fee). With a protocol fee the input is minimal.
//! 3. **Invariant preservation**: `k` never decreases across a trade.
//! 4. **Quote linearity** within one unit.
//! 5. **Zero inputs** always fail.

use proptest::prelude::*;

use super::{get_amount_in, get_amount_out, quote};
use crate::config::FeeConfig;
use crate::domain::Amount;
use crate::error::PricingError;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserves between 1e3 and 1e15 raw units.
fn reserve_strategy() -> impl Strategy<Value = u64> {
    1_000u64..=1_000_000_000_000_000u64
}

/// Trade sizes between 1 and 1e12 raw units.
fn amount_strategy() -> impl Strategy<Value = u64> {
    1u64..=1_000_000_000_000u64
}

/// Arbitrary valid fee schedules on either common scale.
fn fee_strategy() -> impl Strategy<Value = FeeConfig> {
    prop_oneof![
        Just(FeeConfig::UNISWAP_V2),
        Just(FeeConfig::DEFIBOX),
        Just(FeeConfig::ZERO_FEE),
        (0u32..=500, 0u32..=500).prop_filter_map("valid bps", |(t, p)| {
            FeeConfig::basis_points(t, p).ok()
        }),
        (0u32..=50).prop_filter_map("valid per mille", |t| FeeConfig::new(t, 0, 1_000).ok()),
    ]
}

fn amt(v: u64) -> Amount {
    Amount::new(v)
}

// ---------------------------------------------------------------------------
// Property 1: Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_amount_out_monotonic(
        ri in reserve_strategy(),
        ro in reserve_strategy(),
        a in amount_strategy(),
        b in amount_strategy(),
        fees in fee_strategy(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (Ok(out_lo), Ok(out_hi)) = (
            get_amount_out(amt(lo), amt(ri), amt(ro), &fees),
            get_amount_out(amt(hi), amt(ri), amt(ro), &fees),
        ) else {
            return Err(TestCaseError::fail("get_amount_out failed on valid input"));
        };
        prop_assert!(out_lo <= out_hi, "out({lo})={out_lo} > out({hi})={out_hi}");
    }

    #[test]
    fn prop_amount_in_monotonic(
        ri in reserve_strategy(),
        ro in reserve_strategy(),
        a in 1u64..=1_000_000u64,
        b in 1u64..=1_000_000u64,
        fees in fee_strategy(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if hi >= ro { return Ok(()); }
        let (Ok(in_lo), Ok(in_hi)) = (
            get_amount_in(amt(lo), amt(ri), amt(ro), &fees),
            get_amount_in(amt(hi), amt(ri), amt(ro), &fees),
        ) else {
            return Ok(());
        };
        prop_assert!(in_lo <= in_hi, "in({lo})={in_lo} > in({hi})={in_hi}");
    }
}

// ---------------------------------------------------------------------------
// Property 2: Round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_amount_in_never_underpays(
        ri in reserve_strategy(),
        ro in reserve_strategy(),
        share in 1u64..=9_999u64,
        fees in fee_strategy(),
    ) {
        // Request between 0.01% and 99.99% of the output reserve.
        let want = ro / 10_000 * share;
        if want == 0 { return Ok(()); }
        let Ok(needed) = get_amount_in(amt(want), amt(ri), amt(ro), &fees) else {
            return Ok(());
        };
        let Ok(got) = get_amount_out(needed, amt(ri), amt(ro), &fees) else {
            return Err(TestCaseError::fail("get_amount_out failed on a computed input"));
        };
        prop_assert!(got.get() >= want, "paid {needed}, received {got} < {want}");
    }

    #[test]
    fn prop_amount_in_never_overcharges(
        ri in reserve_strategy(),
        ro in reserve_strategy(),
        x in amount_strategy(),
        fees in fee_strategy(),
    ) {
        let Ok(out) = get_amount_out(amt(x), amt(ri), amt(ro), &fees) else {
            return Err(TestCaseError::fail("get_amount_out failed on valid input"));
        };
        if out.is_zero() { return Ok(()); }
        let Ok(back) = get_amount_in(out, amt(ri), amt(ro), &fees) else {
            return Err(TestCaseError::fail("get_amount_in failed on a computed output"));
        };

        if fees.has_protocol_fee() {
            prop_assert!(back.get() <= x, "back={back} > x={x} under {fees}");
            return Ok(());
        }
        let den = u128::from(fees.denominator());
        let with_fee = u128::from(x) * u128::from(fees.trade_multiplier());
        let exact = (with_fee * u128::from(ro)) % (u128::from(ri) * den + with_fee) == 0;
        if exact {
            prop_assert!(back.get() <= x + 1, "back={back} > x+1={} under {fees}", x + 1);
        } else {
            prop_assert!(back.get() <= x, "back={back} > x={x} under {fees}");
        }
    }

    #[test]
    fn prop_protocol_fee_amount_in_is_minimal(
        ri in 1u64..=1_000_000u64,
        ro in 2u64..=1_000_000u64,
        share in 1u64..=999u64,
        protocol in 1u32..=50u32,
    ) {
        let Ok(fees) = FeeConfig::new(0, protocol, 1_000) else {
            return Err(TestCaseError::fail("valid fees"));
        };
        let want = (ro * share / 1_000).max(1);
        if want >= ro { return Ok(()); }
        let Ok(needed) = get_amount_in(amt(want), amt(ri), amt(ro), &fees) else {
            return Err(TestCaseError::fail("get_amount_in failed on valid input"));
        };
        if needed.get() <= 1 { return Ok(()); }
        let Ok(short) = get_amount_out(amt(needed.get() - 1), amt(ri), amt(ro), &fees) else {
            return Err(TestCaseError::fail("get_amount_out failed on valid input"));
        };
        prop_assert!(short.get() < want, "{} already buys {want}", needed.get() - 1);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Invariant preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_k_non_decreasing(
        ri in reserve_strategy(),
        ro in reserve_strategy(),
        x in amount_strategy(),
        trade_bps in 0u32..=100u32,
    ) {
        let Ok(fees) = FeeConfig::basis_points(trade_bps, 0) else {
            return Err(TestCaseError::fail("valid fees"));
        };
        let Ok(out) = get_amount_out(amt(x), amt(ri), amt(ro), &fees) else {
            return Err(TestCaseError::fail("get_amount_out failed on valid input"));
        };
        let k_before = u128::from(ri) * u128::from(ro);
        let k_after = (u128::from(ri) + u128::from(x)) * u128::from(ro - out.get());
        prop_assert!(k_after >= k_before, "k fell from {k_before} to {k_after}");
    }
}

// ---------------------------------------------------------------------------
// Property 4: Quote linearity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_quote_linear(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in amount_strategy(),
    ) {
        let (Ok(single), Ok(double)) = (
            quote(amt(a), amt(ra), amt(rb)),
            quote(amt(2 * a), amt(ra), amt(rb)),
        ) else {
            return Ok(());
        };
        let twice = 2 * single.get();
        prop_assert!(double.get() >= twice && double.get() - twice <= 1,
            "quote(2a)={double}, 2·quote(a)={twice}");
    }
}

// ---------------------------------------------------------------------------
// Property 5: Zero inputs
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_zero_inputs_fail(
        r in reserve_strategy(),
        a in amount_strategy(),
        fees in fee_strategy(),
    ) {
        prop_assert_eq!(
            get_amount_out(Amount::ZERO, amt(r), amt(r), &fees),
            Err(PricingError::InsufficientInputAmount)
        );
        prop_assert_eq!(
            get_amount_in(Amount::ZERO, amt(r), amt(r), &fees),
            Err(PricingError::InsufficientOutputAmount)
        );
        prop_assert_eq!(
            quote(Amount::ZERO, amt(r), amt(r)),
            Err(PricingError::InsufficientAmount)
        );
        prop_assert_eq!(
            get_amount_out(amt(a), Amount::ZERO, amt(r), &fees),
            Err(PricingError::InsufficientLiquidity)
        );
        prop_assert_eq!(
            get_amount_out(amt(a), amt(r), Amount::ZERO, &fees),
            Err(PricingError::InsufficientLiquidity)
        );
        prop_assert_eq!(
            quote(amt(a), amt(r), Amount::ZERO),
            Err(PricingError::InsufficientLiquidity)
        );
    }
}
