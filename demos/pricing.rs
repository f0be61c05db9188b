//! Constant-product pricing example.
//!
//! Prices a few trades with the integer API, then repeats one through
//! the asset adapter.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=cpmm_pricing=trace cargo run --example pricing
//! ```

use cpmm_pricing::adapter;
use cpmm_pricing::config::FeeConfig;
use cpmm_pricing::domain::{Amount, Asset, Symbol};
use cpmm_pricing::pricing::{get_amount_in, get_amount_out, quote};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    println!("=== Constant Product Pricing (x · y = k) ===\n");

    // ── 1. Integer API, 0.30% fee ───────────────────────────────────────
    let fees = FeeConfig::UNISWAP_V2;
    let reserve_in = Amount::new(45_851_931_234);
    let reserve_out = Amount::new(125_682_033_533);
    println!("Fees:        {fees}");
    println!("Reserve in:  {reserve_in}");
    println!("Reserve out: {reserve_out}");

    let amount_in = Amount::new(10_000);
    let amount_out = get_amount_out(amount_in, reserve_in, reserve_out, &fees)?;
    let back = get_amount_in(amount_out, reserve_in, reserve_out, &fees)?;
    let fair = quote(amount_in, reserve_in, reserve_out)?;

    println!("\n--- Sell {amount_in} ---");
    println!("  get_amount_out: {amount_out}");
    println!("  get_amount_in:  {back}");
    println!("  quote (no fee): {fair}");

    // ── 2. Protocol fee on top of the trading fee ───────────────────────
    let defibox = FeeConfig::DEFIBOX;
    let rams = get_amount_out(
        Amount::new(1_500_000),
        Amount::new(92_827_485),
        Amount::new(66_092),
        &defibox,
    )?;
    println!("\n--- {defibox} ---");
    println!("  150.0000 EOS buys {rams} RAMS");

    // ── 3. Asset adapter ────────────────────────────────────────────────
    let eos = Symbol::parse("EOS", 4)?;
    let usdt = Symbol::parse("USDT", 4)?;
    let pool_eos = Asset::new(reserve_in, eos);
    let pool_usdt = Asset::new(reserve_out, usdt);
    let sell = Asset::from_display(1.0, eos)?;

    let bought = adapter::get_amount_out(sell, pool_eos, pool_usdt, &fees)?;
    let cost = adapter::get_amount_in(bought, pool_eos, pool_usdt, &fees)?;
    println!("\n--- Pool {pool_eos} / {pool_usdt} ---");
    println!("  sell {sell} -> {bought}");
    println!("  buying {bought} costs {cost}");

    // ── 4. Rejections ───────────────────────────────────────────────────
    match adapter::get_amount_out(sell, pool_usdt, pool_eos, &fees) {
        Ok(v) => println!("\nunexpected: {v}"),
        Err(e) => println!("\nReversed pool rejected: {e}"),
    }
    match get_amount_in(reserve_out, reserve_in, reserve_out, &fees) {
        Ok(v) => println!("unexpected: {v}"),
        Err(e) => println!("Draining the pool rejected: {e}"),
    }

    Ok(())
}
