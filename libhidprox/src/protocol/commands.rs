// libhidprox/src/protocol/commands.rs

use std::fmt;

use crate::protocol::payload;
use crate::types::{Credential, PayloadFormat};
use crate::{Error, Result};

/// Device opcodes for the HID Prox command family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Command {
    // Reader
    /// Read the tag in the reader field
    HidProxScan = 3002,
    /// Clone an identity onto a T55xx tag; declared, never issued here
    HidProxWriteToT55xx = 3003,

    // Emulator
    /// Store the identity of the active emulation slot
    HidProxSetEmuId = 5002,
    /// Read the identity of the active emulation slot
    HidProxGetEmuId = 5003,
}

impl Command {
    /// Wire opcode
    pub fn opcode(self) -> u16 {
        self as u16
    }

    /// Commands that act on the emulation slot rather than the reader
    pub fn is_emulation(self) -> bool {
        matches!(self, Self::HidProxSetEmuId | Self::HidProxGetEmuId)
    }

    /// Protocol name, as used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::HidProxScan => "HIDPROX_SCAN",
            Self::HidProxWriteToT55xx => "HIDPROX_WRITE_TO_T55XX",
            Self::HidProxSetEmuId => "HIDPROX_SET_EMU_ID",
            Self::HidProxGetEmuId => "HIDPROX_GET_EMU_ID",
        }
    }
}

impl From<Command> for u16 {
    fn from(cmd: Command) -> u16 {
        cmd.opcode()
    }
}

impl TryFrom<u16> for Command {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            3002 => Ok(Self::HidProxScan),
            3003 => Ok(Self::HidProxWriteToT55xx),
            5002 => Ok(Self::HidProxSetEmuId),
            5003 => Ok(Self::HidProxGetEmuId),
            other => Err(Error::UnknownCommand(other)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.opcode())
    }
}

/// A request ready to hand to a transport: opcode plus payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Opcode to send
    pub command: Command,
    /// Request body, possibly empty
    pub payload: Vec<u8>,
}

impl Request {
    /// Arbitrary request.
    pub fn new(command: Command, payload: Vec<u8>) -> Self {
        Self { command, payload }
    }

    /// Scan request, no payload.
    pub fn scan() -> Self {
        Self::new(Command::HidProxScan, Vec::new())
    }

    /// Set-identity request carrying `credential` in `format`.
    pub fn set_emu_id(credential: &Credential, format: PayloadFormat) -> Self {
        Self::new(
            Command::HidProxSetEmuId,
            payload::encode_emu_id(credential, format),
        )
    }

    /// Get-identity request, no payload.
    pub fn get_emu_id() -> Self {
        Self::new(Command::HidProxGetEmuId, Vec::new())
    }
}
