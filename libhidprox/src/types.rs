// libhidprox/src/types.rs
//! Value types shared by the codec and the command layer.

use derive_more::Display;

use crate::constants::{FACTORY_CARD_NUMBER_BASE, TAG_DATA_SIZE};
use crate::error::ValidationError;
use crate::{Error, Result};

/// Credential field identifier, used to report which input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    /// 8-bit site code
    #[display(fmt = "facility_code")]
    FacilityCode,
    /// 16-bit card id
    #[display(fmt = "card_number")]
    CardNumber,
}

impl Field {
    /// Largest value the field can carry.
    pub const fn max(self) -> i64 {
        match self {
            Self::FacilityCode => u8::MAX as i64,
            Self::CardNumber => u16::MAX as i64,
        }
    }

    fn check(self, value: i64) -> std::result::Result<i64, ValidationError> {
        if (0..=self.max()).contains(&value) {
            Ok(value)
        } else {
            Err(ValidationError::OutOfRange { field: self, value })
        }
    }
}

/// Parity kind for `calc_parity`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParityType {
    /// Bit is set when the covered ones are odd
    Even = 0,
    /// Bit is set when the covered ones are even
    Odd = 1,
}

/// A 26-bit Wiegand credential: 8-bit facility code + 16-bit card number.
///
/// Both fields are in range by construction. Wider caller input goes through
/// [`Credential::try_from_raw`], which rejects rather than truncates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "FC {} / CN {}", facility_code, card_number)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Credential {
    facility_code: u8,
    card_number: u16,
}

impl Credential {
    /// Build from already-typed fields. Cannot fail.
    pub const fn new(facility_code: u8, card_number: u16) -> Self {
        Self {
            facility_code,
            card_number,
        }
    }

    /// Validate untyped caller input (CLI arguments, script values).
    /// The facility code is checked first.
    pub fn try_from_raw(
        facility_code: i64,
        card_number: i64,
    ) -> std::result::Result<Self, ValidationError> {
        let fc = Field::FacilityCode.check(facility_code)?;
        let cn = Field::CardNumber.check(card_number)?;
        Ok(Self::new(fc as u8, cn as u16))
    }

    /// Identity a freshly initialised emulator slot presents.
    pub const fn factory_default(slot: u8) -> Self {
        Self::new(0, FACTORY_CARD_NUMBER_BASE + slot as u16)
    }

    /// 8-bit facility code
    pub fn facility_code(&self) -> u8 {
        self.facility_code
    }

    /// 16-bit card number
    pub fn card_number(&self) -> u16 {
        self.card_number
    }

    /// Copy with a different facility code.
    pub fn with_facility_code(self, facility_code: u8) -> Self {
        Self {
            facility_code,
            ..self
        }
    }

    /// Copy with a different card number.
    pub fn with_card_number(self, card_number: u16) -> Self {
        Self {
            card_number,
            ..self
        }
    }

    /// Replace the fields that were supplied, keeping the others.
    ///
    /// Used for partial updates: read the current emulation identity, merge
    /// the caller's changes, then write the merged pair back.
    pub fn merge(
        self,
        facility_code: Option<i64>,
        card_number: Option<i64>,
    ) -> std::result::Result<Self, ValidationError> {
        let fc = facility_code.map_or(Ok(self.facility_code as i64), |v| {
            Field::FacilityCode.check(v)
        })?;
        let cn = card_number.map_or(Ok(self.card_number as i64), |v| {
            Field::CardNumber.check(v)
        })?;
        Ok(Self::new(fc as u8, cn as u16))
    }
}

impl From<(u8, u16)> for Credential {
    fn from((facility_code, card_number): (u8, u16)) -> Self {
        Self::new(facility_code, card_number)
    }
}

/// Per-slot record kept by the emulator.
///
/// Layout matches the firmware's unpacked C struct, where the card number
/// is aligned to offset 2: facility(1) + padding(1) + card number(2, little-endian)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagData {
    /// Identity stored in the slot
    pub credential: Credential,
    /// Alignment byte between the facility code and card number
    pub padding: u8,
}

impl TagData {
    /// Record for `credential` with zero padding.
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            padding: 0,
        }
    }

    /// Serialize in the persisted layout.
    pub fn to_bytes(&self) -> [u8; TAG_DATA_SIZE] {
        let cn = self.credential.card_number().to_le_bytes();
        [self.credential.facility_code(), self.padding, cn[0], cn[1]]
    }

    /// Parse a persisted record. Bytes beyond the record size are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < TAG_DATA_SIZE {
            return Err(Error::InvalidLength {
                expected: TAG_DATA_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            credential: Credential::new(bytes[0], u16::from_le_bytes([bytes[2], bytes[3]])),
            padding: bytes[1],
        })
    }
}

impl From<Credential> for TagData {
    fn from(credential: Credential) -> Self {
        Self::new(credential)
    }
}

/// How emulation identity payloads are carried between host and device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PayloadFormat {
    /// `[facility:1][card:2 big-endian][reserved:1]`
    #[default]
    #[display(fmt = "summary")]
    Summary,
    /// Raw Wiegand frame followed by one reserved byte.
    #[display(fmt = "wiegand")]
    Wiegand,
}
