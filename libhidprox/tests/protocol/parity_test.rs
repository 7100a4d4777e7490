#[path = "../common/mod.rs"]
mod common;

use libhidprox::protocol::calc_parity;
use libhidprox::types::ParityType;

#[test]
fn parity_known_vectors() {
    assert_eq!(calc_parity(0b1111, 0, 4, ParityType::Even), 0);
    assert_eq!(calc_parity(0b1110, 0, 4, ParityType::Even), 1);
    assert_eq!(calc_parity(0b1111, 0, 4, ParityType::Odd), 1);
    assert_eq!(calc_parity(0b1110, 0, 4, ParityType::Odd), 0);
}

#[test]
fn stored_parity_bits_match_layout() {
    let frame = u32::from_le_bytes(common::fixtures::sample_frame());
    assert_eq!(
        ((frame >> 25) & 1) as u8,
        calc_parity(frame, 1, 12, ParityType::Even)
    );
    assert_eq!((frame & 1) as u8, calc_parity(frame, 13, 12, ParityType::Odd));
}
