// libhidprox/src/error.rs

use thiserror::Error;

use crate::protocol::{Command, Status};
use crate::types::Field;

/// Caller-supplied value outside the declared bit width of a credential
/// field. Always raised before anything is sent to a transport.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// `value` does not fit `field`
    #[error("{} out of range: {} (allowed 0..={})", .field, .value, .field.max())]
    OutOfRange {
        /// Rejected field
        field: Field,
        /// Value as supplied
        value: i64,
    },
}

/// Failure to recover a credential from received bytes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer bytes than the format needs
    #[error("payload too short: expected {expected} bytes, got {actual}")]
    TooShort {
        /// Minimum length
        expected: usize,
        /// Received length
        actual: usize,
    },

    /// Recomputed parity differs from the received bits. Tuples are
    /// `(p0, p1)`.
    #[error("parity mismatch: expected {expected:?}, got {actual:?}")]
    ParityMismatch {
        /// Parity recomputed from the data bits
        expected: (u8, u8),
        /// Parity bits found in the frame
        actual: (u8, u8),
    },
}

/// Outcome of a scan that did not produce a credential.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The reader field is empty
    #[error("no tag present")]
    NoTagPresent,

    /// A tag answered but its data did not decode
    #[error("corrupt read: {0}")]
    CorruptRead(DecodeError),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// Caller input rejected before sending
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Response payload could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Scan finished without a credential
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Device answered with a non-success status
    #[error("{command} failed with status {status}")]
    Status {
        /// Command that was sent
        command: Command,
        /// Status the device returned, unchanged
        status: Status,
    },

    /// Opcode echo does not match the request
    #[error("unexpected response opcode: expected {expected}, got {actual}")]
    UnexpectedResponse {
        /// Opcode sent
        expected: u16,
        /// Opcode echoed
        actual: u16,
    },

    /// Opcode outside the HID Prox command family
    #[error("unknown command opcode: {0}")]
    UnknownCommand(u16),

    /// Tag data record buffer too small
    #[error("invalid buffer length: expected at least {expected}, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// Emulator slot index out of range
    #[error("invalid slot: {0}")]
    InvalidSlot(u8),

    /// No reply within the configured timeout
    #[error("operation timed out")]
    Timeout,

    /// Communication fault reported by the transport
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
