//! Value types shared by the pricing functions and the asset adapter.
//!
//! [`Amount`] is the raw integer quantity every pricing call works on.
//! [`Decimals`], [`SymbolCode`], [`Symbol`] and [`Asset`] describe how a
//! raw amount maps to a human-readable quantity.

mod amount;
mod asset;
mod decimals;
mod rounding;
mod symbol;

pub use amount::Amount;
pub use asset::Asset;
pub use decimals::Decimals;
pub use rounding::Rounding;
pub use symbol::{Symbol, SymbolCode};
