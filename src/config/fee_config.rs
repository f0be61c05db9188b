//! Fee parameters for constant-product pricing.

use core::fmt;

use crate::error::PricingError;

/// Basis-point denominator (10 000 = 100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Trading and protocol fee rates, expressed as integer numerators over
/// a shared denominator.
///
/// The same `FeeConfig` must be passed to both
/// [`get_amount_out`](crate::pricing::get_amount_out) and
/// [`get_amount_in`](crate::pricing::get_amount_in); the round-trip
/// guarantees only hold within a single convention.
///
/// # Validation
///
/// - `denominator` must be non-zero.
/// - `trade_fee + protocol_fee` must be strictly below `denominator`.
///
/// Fields are private, so every value in circulation has passed
/// validation (including values deserialized with the `serde` feature).
///
/// # Examples
///
/// ```
/// use cpmm_pricing::config::FeeConfig;
///
/// // 0.3% on a 1 000 scale is the same rate as 30 bp.
/// let per_mille = FeeConfig::new(3, 0, 1_000).expect("valid fees");
/// assert_eq!(per_mille.trade_multiplier(), 997);
/// assert_eq!(FeeConfig::UNISWAP_V2.trade_multiplier(), 9_970);
///
/// assert!(FeeConfig::new(9_000, 1_000, 10_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawFeeConfig")
)]
pub struct FeeConfig {
    trade_fee: u32,
    protocol_fee: u32,
    denominator: u32,
}

impl FeeConfig {
    /// 0.30% trading fee, no protocol fee (Uniswap V2; equal to 997/1000).
    pub const UNISWAP_V2: Self = Self {
        trade_fee: 30,
        protocol_fee: 0,
        denominator: BPS_DENOMINATOR,
    };

    /// 0.20% trading fee plus 0.10% protocol fee (Defibox style).
    pub const DEFIBOX: Self = Self {
        trade_fee: 20,
        protocol_fee: 10,
        denominator: BPS_DENOMINATOR,
    };

    /// No fees at all; pricing follows the bare `x · y = k` curve.
    pub const ZERO_FEE: Self = Self {
        trade_fee: 0,
        protocol_fee: 0,
        denominator: BPS_DENOMINATOR,
    };

    /// Creates a new `FeeConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidFee`] if the parameters violate the
    /// invariants listed on the type.
    pub const fn new(
        trade_fee: u32,
        protocol_fee: u32,
        denominator: u32,
    ) -> Result<Self, PricingError> {
        let config = Self {
            trade_fee,
            protocol_fee,
            denominator,
        };
        match config.validate() {
            Ok(()) => Ok(config),
            Err(e) => Err(e),
        }
    }

    /// Creates a `FeeConfig` on the basis-point scale (denominator 10 000).
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidFee`] if `trade_bps + protocol_bps >= 10_000`.
    pub const fn basis_points(trade_bps: u32, protocol_bps: u32) -> Result<Self, PricingError> {
        Self::new(trade_bps, protocol_bps, BPS_DENOMINATOR)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidFee`] on a zero denominator or when
    /// the combined fee reaches the denominator.
    pub const fn validate(&self) -> Result<(), PricingError> {
        if self.denominator == 0 {
            return Err(PricingError::InvalidFee("fee denominator must be non-zero"));
        }
        let total = self.trade_fee as u64 + self.protocol_fee as u64;
        if total >= self.denominator as u64 {
            return Err(PricingError::InvalidFee(
                "trade fee plus protocol fee must be below the denominator",
            ));
        }
        Ok(())
    }

    /// Returns the trading fee numerator.
    #[must_use]
    pub const fn trade_fee(&self) -> u32 {
        self.trade_fee
    }

    /// Returns the protocol fee numerator.
    #[must_use]
    pub const fn protocol_fee(&self) -> u32 {
        self.protocol_fee
    }

    /// Returns the shared denominator.
    #[must_use]
    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Returns `denominator - trade_fee`, the share of input that trades.
    #[must_use]
    pub const fn trade_multiplier(&self) -> u32 {
        self.denominator - self.trade_fee
    }

    /// Returns `denominator - protocol_fee`, the share of input left after
    /// the protocol cut.
    #[must_use]
    pub const fn protocol_multiplier(&self) -> u32 {
        self.denominator - self.protocol_fee
    }

    /// Returns `true` if a protocol fee is charged.
    #[must_use]
    pub const fn has_protocol_fee(&self) -> bool {
        self.protocol_fee != 0
    }
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self::UNISWAP_V2
    }
}

impl fmt::Display for FeeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FeeConfig(trade={}, protocol={}, denominator={})",
            self.trade_fee, self.protocol_fee, self.denominator
        )
    }
}

/// Unvalidated wire form; deserialization goes through [`FeeConfig::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFeeConfig {
    trade_fee: u32,
    #[serde(default)]
    protocol_fee: u32,
    denominator: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFeeConfig> for FeeConfig {
    type Error = PricingError;

    fn try_from(raw: RawFeeConfig) -> Result<Self, Self::Error> {
        Self::new(raw.trade_fee, raw.protocol_fee, raw.denominator)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for preset in [FeeConfig::UNISWAP_V2, FeeConfig::DEFIBOX, FeeConfig::ZERO_FEE] {
            assert_eq!(preset.validate(), Ok(()));
        }
    }

    #[test]
    fn default_is_uniswap_v2() {
        assert_eq!(FeeConfig::default(), FeeConfig::UNISWAP_V2);
    }

    #[test]
    fn basis_points_uses_ten_thousand() {
        let Ok(cfg) = FeeConfig::basis_points(20, 10) else {
            panic!("expected Ok");
        };
        assert_eq!(cfg, FeeConfig::DEFIBOX);
        assert_eq!(cfg.denominator(), 10_000);
    }

    #[test]
    fn multipliers() {
        let cfg = FeeConfig::DEFIBOX;
        assert_eq!(cfg.trade_multiplier(), 9_980);
        assert_eq!(cfg.protocol_multiplier(), 9_990);
        assert!(cfg.has_protocol_fee());
        assert!(!FeeConfig::UNISWAP_V2.has_protocol_fee());
    }

    #[test]
    fn per_mille_scale() {
        let Ok(cfg) = FeeConfig::new(3, 0, 1_000) else {
            panic!("expected Ok");
        };
        assert_eq!(cfg.trade_multiplier(), 997);
    }

    #[test]
    fn zero_denominator_rejected() {
        let Err(e) = FeeConfig::new(0, 0, 0) else {
            panic!("expected Err");
        };
        assert_eq!(e, PricingError::InvalidFee("fee denominator must be non-zero"));
    }

    #[test]
    fn full_fee_rejected() {
        assert!(FeeConfig::new(10_000, 0, 10_000).is_err());
        assert!(FeeConfig::new(5_000, 5_000, 10_000).is_err());
        assert!(FeeConfig::new(9_999, 0, 10_000).is_ok());
    }

    #[test]
    fn sum_does_not_wrap() {
        assert!(FeeConfig::new(u32::MAX, u32::MAX, u32::MAX).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(
            FeeConfig::UNISWAP_V2.to_string(),
            "FeeConfig(trade=30, protocol=0, denominator=10000)"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let Ok(json) = serde_json::to_string(&FeeConfig::DEFIBOX) else {
            panic!("serialize");
        };
        let Ok(back) = serde_json::from_str::<FeeConfig>(&json) else {
            panic!("deserialize");
        };
        assert_eq!(back, FeeConfig::DEFIBOX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_invalid() {
        let parsed =
            serde_json::from_str::<FeeConfig>(r#"{"trade_fee":10000,"denominator":10000}"#);
        assert!(parsed.is_err());
    }
}
