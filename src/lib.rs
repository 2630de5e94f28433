//! Validated hexadecimal string types
//!
//! Two peer value types cover the two surface forms hex-encoded bytes take
//! in the wild: [`RawHexString`] for bare digit sequences ("deadbeef") and
//! [`ZeroHexString`] for the conventional "0x"-prefixed form ("0xdeadbeef")
//! used throughout blockchain tooling. Both validate at construction, so a
//! value of either type is known well-formed everywhere downstream.
//!
//! Every operation is a pure function over an immutable string; the types
//! are freely shareable across threads.

pub mod error;
pub mod radix;
pub mod raw;
pub mod zero;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::error::ValidationError;
pub use crate::radix::ToHexRadix;
pub use crate::raw::RawHexString;
pub use crate::zero::ZeroHexString;
