//! Unified error types for the pricing library.
//!
//! Every fallible operation in the crate returns [`PricingError`]. A
//! pricing call either produces a single exact integer or fails with one
//! of these named conditions; there are no partial or clamped results.

use thiserror::Error;

/// Errors produced by pricing, configuration, and asset conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PricingError {
    /// `get_amount_out` was called with a zero input amount.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// `get_amount_in` was called with a zero output amount.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// `quote` was called with a zero amount.
    #[error("insufficient amount")]
    InsufficientAmount,

    /// One of the pool reserves is zero.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// Both sides of the pair carry the same symbol code.
    #[error("identical assets")]
    IdenticalAssets,

    /// An asset does not carry the symbol of the reserve it is priced against.
    #[error("asset symbol does not match reserve symbol")]
    SymbolMismatch,

    /// A computation exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// A subtraction would have produced a negative value.
    #[error("arithmetic underflow: {0}")]
    ArithmeticUnderflow(&'static str),

    /// A division had a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Fee parameters violate `trade + protocol < denominator`.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Decimal precision outside the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// Malformed symbol code.
    #[error("invalid symbol: {0}")]
    InvalidSymbol(&'static str),

    /// A display value that cannot be scaled to an amount.
    #[error("invalid display value: {0}")]
    InvalidDisplayValue(&'static str),
}

/// Crate-wide result alias.
pub type Result<T, E = PricingError> = core::result::Result<T, E>;
