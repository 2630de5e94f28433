//! Bare hex digit strings
//!
//! A [`RawHexString`] is a sequence of ASCII hex digits with no prefix,
//! e.g. "deadbeef". The empty string is a valid value and represents the
//! integer zero. Mixed case is accepted on input; values produced from
//! integers or bytes are always lowercase.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::radix::ToHexRadix;
use crate::zero::ZeroHexString;

/// A validated string of bare hex digits
///
/// Invariant: every character matches `[0-9a-fA-F]`. The only way to hold
/// one is through the constructors below, so any `RawHexString` reaching
/// downstream code is known well-formed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RawHexString(String);

impl RawHexString {
    /// Check that every character is a hex digit (empty strings pass)
    pub fn is_valid(value: &str) -> bool {
        value.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Check validity and an exact byte length (two digits per byte)
    pub fn is_valid_with_length(value: &str, byte_length: usize) -> bool {
        value.len() == byte_length * 2 && Self::is_valid(value)
    }

    /// Wrap without validating
    ///
    /// The caller asserts that [`is_valid`](Self::is_valid) holds; wrapping
    /// an invalid string voids the contract of every other operation.
    pub fn from_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Validate and wrap, rejecting any non-hex character
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidDigits(value));
        }
        Ok(Self(value))
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
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidDigits(value));
        }
        if value.len() != byte_length * 2 {
            return Err(ValidationError::LengthMismatch {
                got_digits: value.len(),
                expected_bytes: byte_length,
                value,
            });
        }
        Ok(Self(value))
    }

    /// Length-checked variant of [`parse_opt`](Self::parse_opt)
    pub fn parse_opt_with_length(value: impl Into<String>, byte_length: usize) -> Option<Self> {
        Self::parse_with_length(value, byte_length).ok()
    }

    /// Strip the "0x" prefix off an already validated prefixed value
    pub fn from_zero_hex(value: &ZeroHexString) -> Self {
        Self(value.digits().to_owned())
    }

    /// Render an arbitrary-precision integer as lowercase hex digits
    pub fn from_biguint(value: &BigUint) -> Self {
        Self(format!("{:x}", value))
    }

    /// Render a fixed-width integer as lowercase hex digits
    pub fn from_u64(value: u64) -> Self {
        Self(format!("{:x}", value))
    }

    /// Render any base-16-capable value as hex digits
    pub fn from_radix<T: ToHexRadix>(value: &T) -> Self {
        Self(value.to_hex_radix())
    }

    /// Lowercase hex encoding of a byte slice; digit count is always even
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Prepend a single '0' when the digit count is odd
    ///
    /// Aligns the value to a whole number of bytes. Even-length input is
    /// returned unchanged, so the operation is idempotent.
    pub fn pad_start(&self) -> Self {
        if self.0.len() % 2 == 0 {
            self.clone()
        } else {
            Self(format!("0{}", self.0))
        }
    }

    /// Append a single '0' when the digit count is odd
    pub fn pad_end(&self) -> Self {
        if self.0.len() % 2 == 0 {
            self.clone()
        } else {
            Self(format!("{}0", self.0))
        }
    }

    /// Attach the "0x" prefix
    pub fn to_zero_hex(&self) -> ZeroHexString {
        ZeroHexString::from_raw_hex(self)
    }

    /// Parse as an arbitrary-precision integer; empty digits mean zero
    pub fn to_biguint(&self) -> BigUint {
        if self.0.is_empty() {
            return BigUint::default();
        }
        // digits are validated at construction, so this cannot fail
        BigUint::parse_bytes(self.0.as_bytes(), 16).unwrap_or_default()
    }

    /// Parse as a fixed-width integer
    ///
    /// `None` when the value does not fit in 64 bits; empty digits mean
    /// zero.
    pub fn to_u64(&self) -> Option<u64> {
        if self.0.is_empty() {
            return Some(0);
        }
        u64::from_str_radix(&self.0, 16).ok()
    }

    /// Decode to bytes, left-padding an odd digit count first
    pub fn to_bytes(&self) -> Vec<u8> {
        hex::decode(self.pad_start().as_str()).unwrap_or_default()
    }

    /// View the digits as a plain string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of hex digits
    pub fn digit_count(&self) -> usize {
        self.0.len()
    }

    /// True when the value holds no digits
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RawHexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RawHexString {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RawHexString {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<RawHexString> for String {
    fn from(value: RawHexString) -> Self {
        value.0
    }
}

impl AsRef<str> for RawHexString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for RawHexString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
