// libhidprox/src/constants.rs
//! Wire layout and protocol constants used across the crate

/// Serialized Wiegand frame size in bytes
pub const WIEGAND_FRAME_SIZE: usize = 4;

/// Bit position of the card number LSB
pub const CARD_NUMBER_SHIFT: u32 = 1;

/// Bit position of the facility code LSB
pub const FACILITY_CODE_SHIFT: u32 = 17;

/// P0: even parity over bits 1..=12, stored at bit 25
pub const P0_BIT: u32 = 25;
/// First bit covered by P0
pub const P0_START: u32 = 1;

/// P1: odd parity over bits 13..=24, stored at bit 0
pub const P1_BIT: u32 = 0;
/// First bit covered by P1
pub const P1_START: u32 = 13;

/// Both parity ranges cover 12 bits
pub const PARITY_SPAN: u32 = 12;

/// Host/device summary payload: facility(1) + card(2)
pub const SUMMARY_SIZE: usize = 3;

/// Emulation identity payload: summary + reserved(1)
pub const EMU_ID_PAYLOAD_SIZE: usize = 4;

/// Per-slot tag data record size
pub const TAG_DATA_SIZE: usize = 4;

/// Number of emulator slots
pub const SLOT_COUNT: u8 = 8;

/// Factory default card number for slot 0; slot n gets base + n
pub const FACTORY_CARD_NUMBER_BASE: u16 = 1234;

/// Default command timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;
