//! Pricing configuration.
//!
//! Fee rates are explicit values passed into every pricing call rather
//! than compiled-in constants, so one binary can price pools with
//! different fee schedules.

mod fee_config;

pub use fee_config::{FeeConfig, BPS_DENOMINATOR};
