// libhidprox/src/transport/emulator.rs

//! In-memory emulator device.
//!
//! Behaves like the device side of the command set: eight slots holding a
//! 4-byte tag data record each, an active slot, and a reader field into
//! which tests can place a tag. It speaks the summary payload format only.

use log::{debug, info};

use crate::constants::{EMU_ID_PAYLOAD_SIZE, SLOT_COUNT, TAG_DATA_SIZE};
use crate::protocol::payload;
use crate::protocol::{Command, Response, Status};
use crate::transport::traits::Transport;
use crate::types::{Credential, TagData};
use crate::{Error, Result};

/// What the reader currently sees in its field.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldTag {
    Tag(Credential),
    /// Bytes returned verbatim, e.g. a captured or garbled frame
    Raw(Vec<u8>),
}

/// Simulated HID Prox device usable wherever a `Transport` is expected.
#[derive(Debug, Clone)]
pub struct Emulator {
    slots: [TagData; SLOT_COUNT as usize],
    active_slot: u8,
    emulation_enabled: bool,
    field: Option<FieldTag>,
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Emulator {
    /// All slots start from their factory default identity.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|i| TagData::new(Credential::factory_default(i as u8))),
            active_slot: 0,
            emulation_enabled: true,
            field: None,
        }
    }

    fn check_slot(slot: u8) -> Result<usize> {
        if slot >= SLOT_COUNT {
            return Err(Error::InvalidSlot(slot));
        }
        Ok(slot as usize)
    }

    /// Slot that set/get commands act on.
    pub fn active_slot(&self) -> u8 {
        self.active_slot
    }

    /// Select the slot for later set/get commands.
    pub fn set_active_slot(&mut self, slot: u8) -> Result<()> {
        Self::check_slot(slot)?;
        self.active_slot = slot;
        Ok(())
    }

    /// Identity stored in `slot`.
    pub fn identity(&self, slot: u8) -> Result<Credential> {
        Ok(self.slots[Self::check_slot(slot)?].credential)
    }

    /// Restore `slot` to its factory default identity.
    pub fn factory_reset_slot(&mut self, slot: u8) -> Result<()> {
        let idx = Self::check_slot(slot)?;
        self.slots[idx] = TagData::new(Credential::factory_default(slot));
        self.emulation_enabled = true;
        info!(
            "slot {} reset to factory identity {}",
            slot, self.slots[idx].credential
        );
        Ok(())
    }

    /// Load a slot from a persisted tag data record. Loading re-enables
    /// emulation.
    pub fn load_slot(&mut self, slot: u8, record: &[u8]) -> Result<()> {
        let idx = Self::check_slot(slot)?;
        self.slots[idx] = TagData::from_bytes(record)?;
        self.emulation_enabled = true;
        info!("slot {} loaded: {}", slot, self.slots[idx].credential);
        Ok(())
    }

    /// Write the slot's tag data record into `buf`, returning the number of
    /// bytes written.
    pub fn save_slot(&self, slot: u8, buf: &mut [u8]) -> Result<usize> {
        let idx = Self::check_slot(slot)?;
        if buf.len() < TAG_DATA_SIZE {
            return Err(Error::InvalidLength {
                expected: TAG_DATA_SIZE,
                actual: buf.len(),
            });
        }
        buf[..TAG_DATA_SIZE].copy_from_slice(&self.slots[idx].to_bytes());
        Ok(TAG_DATA_SIZE)
    }

    /// Whether the active slot is being emulated.
    pub fn is_emulation_enabled(&self) -> bool {
        self.emulation_enabled
    }

    /// Turn emulation on or off.
    pub fn set_emulation_enabled(&mut self, enabled: bool) {
        self.emulation_enabled = enabled;
        info!(
            "emulation {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    /// Put a tag into the reader field.
    pub fn place_tag(&mut self, credential: Credential) {
        self.field = Some(FieldTag::Tag(credential));
    }

    /// Put raw bytes into the reader field; scans report them unchanged.
    pub fn place_raw(&mut self, bytes: Vec<u8>) {
        self.field = Some(FieldTag::Raw(bytes));
    }

    /// Empty the reader field.
    pub fn remove_tag(&mut self) {
        self.field = None;
    }

    fn handle(&mut self, command: Command, payload: &[u8]) -> (Status, Vec<u8>) {
        match command {
            Command::HidProxScan => match &self.field {
                Some(FieldTag::Tag(c)) => (Status::LfTagOk, payload::encode_summary(c).to_vec()),
                Some(FieldTag::Raw(bytes)) => (Status::LfTagOk, bytes.clone()),
                None => (Status::LfTagNotFound, Vec::new()),
            },
            Command::HidProxSetEmuId => {
                if payload.len() != EMU_ID_PAYLOAD_SIZE {
                    return (Status::ParErr, Vec::new());
                }
                match payload::decode_summary(payload) {
                    Ok(credential) => {
                        let slot = self.active_slot as usize;
                        self.slots[slot] = TagData::new(credential);
                        info!("slot {} identity set to {}", slot, credential);
                        (Status::Success, Vec::new())
                    }
                    Err(_) => (Status::ParErr, Vec::new()),
                }
            }
            Command::HidProxGetEmuId => {
                let credential = self.slots[self.active_slot as usize].credential;
                let mut data = payload::encode_summary(&credential).to_vec();
                data.push(0x00);
                (Status::Success, data)
            }
            Command::HidProxWriteToT55xx => (Status::NotImplemented, Vec::new()),
        }
    }
}

impl Transport for Emulator {
    fn send_command(
        &mut self,
        command: Command,
        payload: &[u8],
        _timeout_ms: u64,
    ) -> Result<Response> {
        let (status, data) = self.handle(command, payload);
        debug!(
            "emulator {} -> {} [{}]",
            command,
            status,
            hex::encode(&data)
        );
        Ok(Response::new(command, status, data))
    }
}
