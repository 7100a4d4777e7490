// libhidprox/src/protocol/responses.rs

use std::fmt;

use crate::protocol::Command;
use crate::{Error, Result};

/// Device status byte returned with every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Reader found and read a tag (0x40)
    LfTagOk,
    /// Nothing in the reader field (0x41)
    LfTagNotFound,
    /// Bad request parameters (0x60)
    ParErr,
    /// Device is in the wrong reader/emulator mode (0x66)
    DeviceModeError,
    /// Opcode not recognised (0x67)
    InvalidCmd,
    /// Generic success (0x68)
    Success,
    /// Opcode known but not implemented (0x69)
    NotImplemented,
    /// Flash write failed (0x70)
    FlashWriteFail,
    /// Flash read failed (0x71)
    FlashReadFail,
    /// Status byte this crate does not know; kept verbatim.
    Other(u8),
}

impl Status {
    /// Raw status byte.
    pub fn code(self) -> u8 {
        match self {
            Self::LfTagOk => 0x40,
            Self::LfTagNotFound => 0x41,
            Self::ParErr => 0x60,
            Self::DeviceModeError => 0x66,
            Self::InvalidCmd => 0x67,
            Self::Success => 0x68,
            Self::NotImplemented => 0x69,
            Self::FlashWriteFail => 0x70,
            Self::FlashReadFail => 0x71,
            Self::Other(code) => code,
        }
    }

    /// Whether this status means `command` succeeded.
    ///
    /// Emulation commands only report `Success`; an `LfTagOk` on a get/set
    /// reply is not an acknowledgement. Reader commands answer with
    /// `LfTagOk`.
    pub fn is_success_for(self, command: Command) -> bool {
        if command.is_emulation() {
            self == Self::Success
        } else {
            matches!(self, Self::Success | Self::LfTagOk)
        }
    }
}

impl From<u8> for Status {
    fn from(code: u8) -> Self {
        match code {
            0x40 => Self::LfTagOk,
            0x41 => Self::LfTagNotFound,
            0x60 => Self::ParErr,
            0x66 => Self::DeviceModeError,
            0x67 => Self::InvalidCmd,
            0x68 => Self::Success,
            0x69 => Self::NotImplemented,
            0x70 => Self::FlashWriteFail,
            0x71 => Self::FlashReadFail,
            other => Self::Other(other),
        }
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> u8 {
        status.code()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({:#04x})", self, self.code())
    }
}

/// Response as delivered by a transport: opcode echo, status and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Opcode echoed by the device
    pub command: u16,
    /// Status byte
    pub status: Status,
    /// Response payload
    pub data: Vec<u8>,
}

impl Response {
    /// Build a response; `command` may be a `Command` or a raw opcode.
    pub fn new(command: impl Into<u16>, status: Status, data: Vec<u8>) -> Self {
        Self {
            command: command.into(),
            status,
            data,
        }
    }

    /// Ensure the device answered the command that was sent.
    pub fn expect_command(&self, expected: Command) -> Result<()> {
        if self.command != expected.opcode() {
            return Err(Error::UnexpectedResponse {
                expected: expected.opcode(),
                actual: self.command,
            });
        }
        Ok(())
    }

    /// Turn a non-success status into `Error::Status`, passing it through
    /// unchanged.
    pub fn into_success(self, command: Command) -> Result<Self> {
        if self.status.is_success_for(command) {
            Ok(self)
        } else {
            Err(Error::Status {
                command,
                status: self.status,
            })
        }
    }
}
