// libhidprox/src/protocol/mod.rs

/// Opcodes and request building
pub mod commands;
/// Parity bit calculation
pub mod parity;
pub mod payload;
/// Status bytes and responses
pub mod responses;
pub mod wiegand;

pub use commands::{Command, Request};
pub use parity::calc_parity;
pub use responses::{Response, Status};
pub use wiegand::{decode, encode};
