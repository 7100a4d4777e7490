// libhidprox/src/protocol/parity.rs
//! Single-bit parity over a bit range of a frame.

use crate::types::ParityType;

/// Compute the parity bit over `length` bits of `value` starting at
/// `start_bit`. Even parity is the XOR of the bits; odd parity is its
/// inverse. Caller guarantees `start_bit + length <= 32`.
pub fn calc_parity(value: u32, start_bit: u32, length: u32, parity: ParityType) -> u8 {
    let mut bit = 0u8;
    for i in 0..length {
        bit ^= ((value >> (start_bit + i)) & 1) as u8;
    }
    match parity {
        ParityType::Even => bit,
        ParityType::Odd => bit ^ 1,
    }
}
