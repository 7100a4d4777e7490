// libhidprox/src/lib.rs

//! libhidprox
//!
//! 26-bit Wiegand (HID Prox) credential codec and the emulation command
//! layer that carries it over a request/response transport.
#![warn(missing_docs)]

pub mod constants;
/// Command layer and its builder
pub mod device;
/// Error types and the crate `Result` alias
pub mod error;
/// Common imports
pub mod prelude;
/// Codecs, opcodes and status bytes
pub mod protocol;
pub mod test_support;
/// Transport trait and in-process implementations
pub mod transport;
/// Credential and tag record value types
pub mod types;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the value types in `types` are available for consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
