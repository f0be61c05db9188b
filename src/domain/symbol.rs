//! Asset symbols: a short upper-case code plus decimal precision.

use core::fmt;

use super::Decimals;
use crate::error::PricingError;

/// Maximum length of a symbol code.
const MAX_CODE_LEN: usize = 7;

/// Up to seven upper-case ASCII letters naming an asset (`EOS`, `PINK`, …).
///
/// Stored inline so the type stays `Copy`.
///
/// # Examples
///
/// ```
/// use cpmm_pricing::domain::SymbolCode;
///
/// let code = SymbolCode::new("EOS").expect("valid code");
/// assert_eq!(code.as_str(), "EOS");
/// assert!(SymbolCode::new("eos").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolCode {
    bytes: [u8; MAX_CODE_LEN],
    len: u8,
}

impl SymbolCode {
    /// Parses a symbol code.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidSymbol`] if `code` is empty, longer
    /// than seven characters, or contains anything but `A`–`Z`.
    pub fn new(code: &str) -> Result<Self, PricingError> {
        if code.is_empty() {
            return Err(PricingError::InvalidSymbol("symbol code is empty"));
        }
        if code.len() > MAX_CODE_LEN {
            return Err(PricingError::InvalidSymbol(
                "symbol code longer than 7 characters",
            ));
        }
        let mut bytes = [0u8; MAX_CODE_LEN];
        for (slot, b) in bytes.iter_mut().zip(code.bytes()) {
            if !b.is_ascii_uppercase() {
                return Err(PricingError::InvalidSymbol(
                    "symbol code must be upper-case A-Z",
                ));
            }
            *slot = b;
        }
        #[allow(clippy::cast_possible_truncation)]
        let len = code.len() as u8;
        Ok(Self { bytes, len })
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Construction admits only ASCII letters.
        core::str::from_utf8(&self.bytes[..usize::from(self.len)]).unwrap_or_default()
    }
}

impl fmt::Debug for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SymbolCode").field(&self.as_str()).finish()
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for SymbolCode {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SymbolCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SymbolCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

/// The identity of an asset: its code and the precision of its display form.
///
/// Two symbols are equal only if both code and precision match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol {
    code: SymbolCode,
    precision: Decimals,
}

impl Symbol {
    /// Creates a new `Symbol` from already-validated parts.
    #[must_use]
    pub const fn new(code: SymbolCode, precision: Decimals) -> Self {
        Self { code, precision }
    }

    /// Parses `code` and validates `precision` in one step.
    ///
    /// # Errors
    ///
    /// Propagates [`PricingError::InvalidSymbol`] or
    /// [`PricingError::InvalidPrecision`].
    pub fn parse(code: &str, precision: u8) -> Result<Self, PricingError> {
        Ok(Self::new(SymbolCode::new(code)?, Decimals::new(precision)?))
    }

    /// Returns the symbol code.
    #[must_use]
    pub const fn code(&self) -> SymbolCode {
        self.code
    }

    /// Returns the display precision.
    #[must_use]
    pub const fn precision(&self) -> Decimals {
        self.precision
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision.get(), self.code)
    }
}
