//! "0x"-prefixed hex strings
//!
//! A [`ZeroHexString`] is the literal "0x" followed by a valid
//! [`RawHexString`], e.g. "0xdeadbeef". The two forms are isomorphic:
//! "0x" with an empty suffix corresponds to the empty raw value and
//! conventionally means the integer zero. Padding and prefix stripping
//! delegate to the raw form.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::radix::ToHexRadix;
use crate::raw::RawHexString;

/// A validated "0x"-prefixed hex string
///
/// Invariant: the first two characters are exactly "0x" and every
/// remaining character matches `[0-9a-fA-F]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZeroHexString(String);

impl ZeroHexString {
    /// Check for the "0x" prefix followed by only hex digits
    pub fn is_valid(value: &str) -> bool {
        match value.strip_prefix("0x") {
            Some(digits) => RawHexString::is_valid(digits),
            None => false,
        }
    }

    /// Check validity and an exact byte length (total length `2 + 2n`)
    pub fn is_valid_with_length(value: &str, byte_length: usize) -> bool {
        value.len() == 2 + byte_length * 2 && Self::is_valid(value)
    }

    /// Wrap without validating
    ///
    /// The caller asserts that [`is_valid`](Self::is_valid) holds; wrapping
    /// an invalid string voids the contract of every other operation.
    pub fn from_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Validate and wrap, rejecting a missing prefix or bad digits
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        match value.strip_prefix("0x") {
            None => Err(ValidationError::MissingPrefix(value)),
            Some(digits) if !RawHexString::is_valid(digits) => {
                Err(ValidationError::InvalidDigits(value))
            }
            Some(_) => Ok(Self(value)),
        }
    }

    /// Validate and wrap, `None` on failure
    pub fn parse_opt(value: impl Into<String>) -> Option<Self> {
        Self::parse(value).ok()
    }

    /// Validate format and an exact byte length
    pub fn parse_with_length(
        value: impl Into<String>,
        byte_length: usize,
    ) -> Result<Self, ValidationError> {
        let parsed = Self::parse(value)?;
        if parsed.digit_count() != byte_length * 2 {
            return Err(ValidationError::LengthMismatch {
                got_digits: parsed.digit_count(),
                expected_bytes: byte_length,
                value: parsed.0,
            });
        }
        Ok(parsed)
    }

    /// Length-checked variant of [`parse_opt`](Self::parse_opt)
    pub fn parse_opt_with_length(value: impl Into<String>, byte_length: usize) -> Option<Self> {
        Self::parse_with_length(value, byte_length).ok()
    }

    /// Attach the "0x" prefix to an already validated raw value
    pub fn from_raw_hex(value: &RawHexString) -> Self {
        Self(format!("0x{}", value.as_str()))
    }

    /// Render an arbitrary-precision integer; zero renders as "0x0"
    pub fn from_biguint(value: &BigUint) -> Self {
        Self(format!("0x{:x}", value))
    }

    /// Render a fixed-width integer; zero renders as "0x0"
    pub fn from_u64(value: u64) -> Self {
        Self(format!("0x{:x}", value))
    }

    /// Render any base-16-capable value with the "0x" prefix
    pub fn from_radix<T: ToHexRadix>(value: &T) -> Self {
        Self(format!("0x{}", value.to_hex_radix()))
    }

    /// Prefixed lowercase hex encoding of a byte slice
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    /// Prepend a single '0' to the digits when their count is odd
    ///
    /// The prefix stays in place; only the suffix is padded, by way of the
    /// raw form. Idempotent.
    pub fn pad_start(&self) -> Self {
        self.to_raw_hex().pad_start().to_zero_hex()
    }

    /// Append a single '0' to the digits when their count is odd
    pub fn pad_end(&self) -> Self {
        self.to_raw_hex().pad_end().to_zero_hex()
    }

    /// Strip the "0x" prefix
    pub fn to_raw_hex(&self) -> RawHexString {
        RawHexString::from_zero_hex(self)
    }

    /// Parse as an arbitrary-precision integer; "0x" alone means zero
    pub fn to_biguint(&self) -> BigUint {
        self.to_raw_hex().to_biguint()
    }

    /// Parse as a fixed-width integer
    ///
    /// `None` when the value does not fit in 64 bits; "0x" alone means
    /// zero.
    pub fn to_u64(&self) -> Option<u64> {
        self.to_raw_hex().to_u64()
    }

    /// Decode the digits to bytes, left-padding an odd count first
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_raw_hex().to_bytes()
    }

    /// View the whole prefixed string as a plain string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digits after the "0x" prefix
    pub fn digits(&self) -> &str {
        &self.0[2..]
    }

    /// Number of hex digits, not counting the prefix
    pub fn digit_count(&self) -> usize {
        self.0.len() - 2
    }

    /// True when only the prefix is present
    pub fn is_empty(&self) -> bool {
        self.0.len() == 2
    }
}

impl Default for ZeroHexString {
    /// The bare prefix "0x", the prefixed form of zero digits
    fn default() -> Self {
        Self("0x".to_owned())
    }
}

impl fmt::Display for ZeroHexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ZeroHexString {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ZeroHexString {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ZeroHexString> for String {
    fn from(value: ZeroHexString) -> Self {
        value.0
    }
}

impl AsRef<str> for ZeroHexString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for ZeroHexString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(ZeroHexString::is_valid("0xFF"));
        assert!(ZeroHexString::is_valid("0x"));
        assert!(!ZeroHexString::is_valid("FF"));
        assert!(!ZeroHexString::is_valid("0xzz"));
        assert!(!ZeroHexString::is_valid(""));
    }

    #[test]
    fn test_is_valid_with_length() {
        assert!(ZeroHexString::is_valid_with_length("0xdead", 2));
        assert!(!ZeroHexString::is_valid_with_length("0xdead", 3));
        assert!(ZeroHexString::is_valid_with_length("0x", 0));
    }

    #[test]
    fn test_parse() {
        assert_eq!(ZeroHexString::parse("0xabc").unwrap().as_str(), "0xabc");
        assert_eq!(
            ZeroHexString::parse("abc").unwrap_err(),
            ValidationError::MissingPrefix("abc".to_string())
        );
        assert_eq!(
            ZeroHexString::parse("0xabcg").unwrap_err(),
            ValidationError::InvalidDigits("0xabcg".to_string())
        );
        assert!(ZeroHexString::parse_opt("abc").is_none());
        assert!(ZeroHexString::parse_opt("0xabc").is_some());
    }

    #[test]
    fn test_parse_with_length() {
        assert!(ZeroHexString::parse_with_length("0xdead", 2).is_ok());
        assert_eq!(
            ZeroHexString::parse_with_length("0xdead", 3).unwrap_err(),
            ValidationError::LengthMismatch {
                value: "0xdead".to_string(),
                expected_bytes: 3,
                got_digits: 4,
            }
        );
        assert!(ZeroHexString::parse_opt_with_length("0xdead", 1).is_none());
    }

    #[test]
    fn test_prefix_round_trip() {
        let raw = RawHexString::parse("abc").unwrap();
        let zero = ZeroHexString::from_raw_hex(&raw);
        assert_eq!(zero.as_str(), "0xabc");
        assert_eq!(zero.to_raw_hex(), raw);
        assert_eq!(RawHexString::from_zero_hex(&zero).as_str(), "abc");
    }

    #[test]
    fn test_padding_keeps_prefix() {
        let odd = ZeroHexString::parse("0xabc").unwrap();
        assert_eq!(odd.pad_start().as_str(), "0x0abc");
        assert_eq!(odd.pad_end().as_str(), "0xabc0");

        let even = ZeroHexString::parse("0xabcd").unwrap();
        assert_eq!(even.pad_start(), even);
        assert_eq!(even.pad_end(), even);
    }

    #[test]
    fn test_integer_conversions() {
        assert_eq!(ZeroHexString::parse("0x").unwrap().to_u64(), Some(0));
        assert_eq!(ZeroHexString::parse("0x10").unwrap().to_u64(), Some(16));
        assert_eq!(ZeroHexString::parse("0x").unwrap().to_biguint(), BigUint::default());
        assert_eq!(ZeroHexString::from_u64(0).as_str(), "0x0");
        assert_eq!(ZeroHexString::from_biguint(&BigUint::from(255u8)).as_str(), "0xff");
        assert_eq!(ZeroHexString::from_radix(&42u32).as_str(), "0x2a");
    }

    #[test]
    fn test_bytes() {
        let zero = ZeroHexString::from_bytes(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(zero.as_str(), "0xdeadbeef");
        assert_eq!(zero.to_bytes(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_default_is_bare_prefix() {
        let empty = ZeroHexString::default();
        assert_eq!(empty.as_str(), "0x");
        assert!(empty.is_empty());
        assert_eq!(empty.digit_count(), 0);
        assert_eq!(empty.digits(), "");
    }
}
