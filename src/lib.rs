//! # cpmm-pricing
//!
//! Deterministic pricing for constant-product (`x · y = k`) liquidity
//! pools, Uniswap V2 style.
//!
//! Three pure functions answer the questions a router or liquidity
//! manager asks of a pool:
//!
//! - [`quote`](pricing::quote): the proportional value of an amount at the current ratio.
//! - [`get_amount_out`](pricing::get_amount_out): the output of an exact-input swap.
//! - [`get_amount_in`](pricing::get_amount_in): the input needed for an exact-output swap.
//!
//! All arithmetic is integer-only with 256-bit intermediates, so results
//! are bit-for-bit reproducible and overflow is reported instead of
//! wrapping.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for domain and config types |
//!
//! # Quick Start
//!
//! ```rust
//! use cpmm_pricing::config::FeeConfig;
//! use cpmm_pricing::domain::Amount;
//! use cpmm_pricing::pricing::{get_amount_in, get_amount_out};
//!
//! let reserve_in = Amount::new(100_000_000);
//! let reserve_out = Amount::new(400_000_000);
//! let fees = FeeConfig::UNISWAP_V2; // 0.30%
//!
//! let out = get_amount_out(Amount::new(10_000), reserve_in, reserve_out, &fees)?;
//! assert_eq!(out, Amount::new(39_876));
//!
//! let needed = get_amount_in(out, reserve_in, reserve_out, &fees)?;
//! assert_eq!(needed, Amount::new(10_000));
//! # Ok::<(), cpmm_pricing::error::PricingError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   adapter    │  Asset in / Asset out, symbol checks
//! └──────┬──────┘
//!        │ raw Amounts
//!        ▼
//! ┌─────────────┐
//! │   pricing    │  quote, get_amount_out, get_amount_in
//! └──────┬──────┘
//!        │ widen → compute → narrow
//!        ▼
//! ┌─────────────┐
//! │    math      │  U256, CheckedArithmetic
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`pricing`] | The three pricing functions |
//! | [`adapter`] | Asset-level wrappers with symbol validation |
//! | [`config`]  | [`FeeConfig`](config::FeeConfig) and its presets |
//! | [`domain`]  | [`Amount`](domain::Amount), [`Asset`](domain::Asset), [`Symbol`](domain::Symbol), [`Decimals`](domain::Decimals) |
//! | [`math`]    | 256-bit checked arithmetic |
//! | [`error`]   | [`PricingError`](error::PricingError) |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events: `trace` for each successful call,
//! `debug` for each rejected one. It never installs a subscriber.

pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod pricing;
