// libhidprox/src/protocol/payload.rs

//! Host/device command payloads.
//!
//! These carry a credential between the host and the device and are
//! distinct from the tag-level Wiegand frame in `protocol::wiegand`. The
//! summary form is `[facility:1][card:2 big-endian]`; emulation identity
//! payloads append one reserved byte.

use crate::constants::{EMU_ID_PAYLOAD_SIZE, SUMMARY_SIZE, WIEGAND_FRAME_SIZE};
use crate::error::DecodeError;
use crate::protocol::wiegand;
use crate::types::{Credential, PayloadFormat};

fn ensure_len(data: &[u8], min: usize) -> Result<(), DecodeError> {
    if data.len() < min {
        return Err(DecodeError::TooShort {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Encode the 3-byte summary form.
pub fn encode_summary(credential: &Credential) -> [u8; SUMMARY_SIZE] {
    let cn = credential.card_number().to_be_bytes();
    [credential.facility_code(), cn[0], cn[1]]
}

/// Decode the summary form from the start of `data`.
pub fn decode_summary(data: &[u8]) -> Result<Credential, DecodeError> {
    ensure_len(data, SUMMARY_SIZE)?;
    Ok(Credential::new(
        data[0],
        u16::from_be_bytes([data[1], data[2]]),
    ))
}

/// Build a set-emulation-identity request payload.
pub fn encode_emu_id(credential: &Credential, format: PayloadFormat) -> Vec<u8> {
    let mut buf = Vec::with_capacity(WIEGAND_FRAME_SIZE + 1);
    match format {
        PayloadFormat::Summary => buf.extend_from_slice(&encode_summary(credential)),
        PayloadFormat::Wiegand => buf.extend_from_slice(&wiegand::encode(credential)),
    }
    buf.push(0x00); // reserved
    buf
}

/// Parse a get-emulation-identity response payload. Only the first four
/// bytes are considered.
pub fn decode_emu_id(data: &[u8], format: PayloadFormat) -> Result<Credential, DecodeError> {
    match format {
        PayloadFormat::Summary => {
            ensure_len(data, EMU_ID_PAYLOAD_SIZE)?;
            decode_summary(data)
        }
        PayloadFormat::Wiegand => wiegand::decode(data),
    }
}

/// Parse a scan response payload. Three bytes are a summary; four or more
/// are a raw Wiegand frame as captured from the tag.
pub fn decode_scan(data: &[u8]) -> Result<Credential, DecodeError> {
    if data.len() >= WIEGAND_FRAME_SIZE {
        wiegand::decode(data)
    } else {
        decode_summary(data)
    }
}
