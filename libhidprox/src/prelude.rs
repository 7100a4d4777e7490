// libhidprox/src/prelude.rs
//! `use libhidprox::prelude::*;` brings in the types most callers need.

pub use crate::device::{Device, DeviceBuilder, DeviceConfig};
pub use crate::protocol::wiegand::{decode, encode};
pub use crate::protocol::{Command, Request, Response, Status, calc_parity};
pub use crate::transport::Transport;
pub use crate::{
    Credential, DecodeError, Error, Field, ParityType, PayloadFormat, Result, ScanError, TagData,
    ValidationError,
};
