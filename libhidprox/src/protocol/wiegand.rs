// libhidprox/src/protocol/wiegand.rs

//! 26-bit Wiegand frame codec.
//!
//! Frame layout (bit 0 = LSB of a `u32`):
//!
//! ```text
//!  31..26 |  25 | 24 ......... 17 | 16 ............ 1 |  0
//!  unused |  P0 |  facility code  |    card number    | P1
//! ```
//!
//! P0 is even parity over bits 1..=12, P1 is odd parity over bits 13..=24.
//! On the wire the frame is 4 bytes, least-significant byte first.

use log::warn;

use crate::constants::{
    CARD_NUMBER_SHIFT, FACILITY_CODE_SHIFT, P0_BIT, P0_START, P1_BIT, P1_START, PARITY_SPAN,
    WIEGAND_FRAME_SIZE,
};
use crate::error::DecodeError;
use crate::protocol::parity::calc_parity;
use crate::types::{Credential, ParityType};

/// Build the frame as an integer.
///
/// P0 is placed before P1 is computed. P0 lies outside P1's range so the
/// order does not change the result, but it matches the reference devices.
pub fn frame_bits(credential: &Credential) -> u32 {
    let mut frame = 0u32;
    frame |= (credential.facility_code() as u32) << FACILITY_CODE_SHIFT;
    frame |= (credential.card_number() as u32) << CARD_NUMBER_SHIFT;

    let p0 = calc_parity(frame, P0_START, PARITY_SPAN, ParityType::Even);
    frame |= (p0 as u32) << P0_BIT;

    let p1 = calc_parity(frame, P1_START, PARITY_SPAN, ParityType::Odd);
    frame |= (p1 as u32) << P1_BIT;

    frame
}

/// Check both parity bits of a frame and extract the credential.
/// Bits 26..=31 are not inspected.
pub fn credential_from_bits(frame: u32) -> Result<Credential, DecodeError> {
    let stored = (((frame >> P0_BIT) & 1) as u8, ((frame >> P1_BIT) & 1) as u8);
    let expected = (
        calc_parity(frame, P0_START, PARITY_SPAN, ParityType::Even),
        calc_parity(frame, P1_START, PARITY_SPAN, ParityType::Odd),
    );
    if stored != expected {
        warn!(
            "wiegand parity check failed: frame={:#010x} expected={:?} stored={:?}",
            frame, expected, stored
        );
        return Err(DecodeError::ParityMismatch {
            expected,
            actual: stored,
        });
    }

    let facility_code = ((frame >> FACILITY_CODE_SHIFT) & 0xff) as u8;
    let card_number = ((frame >> CARD_NUMBER_SHIFT) & 0xffff) as u16;
    Ok(Credential::new(facility_code, card_number))
}

/// Encode a credential into its 4-byte wire form.
pub fn encode(credential: &Credential) -> [u8; WIEGAND_FRAME_SIZE] {
    frame_bits(credential).to_le_bytes()
}

/// Decode a credential from the first 4 bytes of `bytes`. Trailing bytes
/// are ignored.
pub fn decode(bytes: &[u8]) -> Result<Credential, DecodeError> {
    let Some(head) = bytes.first_chunk::<WIEGAND_FRAME_SIZE>() else {
        return Err(DecodeError::TooShort {
            expected: WIEGAND_FRAME_SIZE,
            actual: bytes.len(),
        });
    };
    credential_from_bits(u32::from_le_bytes(*head))
}
