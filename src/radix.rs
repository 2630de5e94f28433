//! Base-16 rendering capability
//!
//! Decouples the string constructors from any one integer implementation:
//! anything that can render itself as bare lowercase hex digits can be
//! turned into a hex string value.

use num_bigint::BigUint;

/// Types that render themselves as bare lowercase base-16 digits
pub trait ToHexRadix {
    /// Render as lowercase hex digits with no sign and no prefix
    fn to_hex_radix(&self) -> String;
}

macro_rules! impl_to_hex_radix {
    ($($ty:ty),*) => {
        $(
            impl ToHexRadix for $ty {
                fn to_hex_radix(&self) -> String {
                    format!("{:x}", self)
                }
            }
        )*
    };
}

impl_to_hex_radix!(u8, u16, u32, u64, u128, usize, BigUint);
