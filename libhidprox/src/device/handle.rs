// libhidprox/src/device/handle.rs
//! The `Device` command layer.

use log::{debug, warn};

use crate::device::DeviceConfig;
use crate::error::ScanError;
use crate::protocol::payload;
use crate::protocol::{Command, Request, Response, Status};
use crate::transport::Transport;
use crate::types::Credential;
use crate::{Error, Result};

/// Command layer for the HID Prox scan and emulation-identity commands.
///
/// Holds nothing but its transport and configuration; every call is an
/// independent request/response exchange. Payload decoding happens
/// explicitly in each method.
pub struct Device<T: Transport = Box<dyn Transport>> {
    transport: T,
    config: DeviceConfig,
}

impl<T: Transport> Device<T> {
    /// Wrap a transport using the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, DeviceConfig::default())
    }

    /// Wrap a transport with explicit settings.
    pub fn with_config(transport: T, config: DeviceConfig) -> Self {
        Self { transport, config }
    }

    /// Active settings.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give the transport back.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Send a request and check the opcode echo. The status is left for
    /// the caller to interpret.
    pub fn execute(&mut self, request: &Request) -> Result<Response> {
        debug!(
            "-> {} [{}]",
            request.command,
            hex::encode(&request.payload)
        );
        let resp = self
            .transport
            .send_request(request, self.config.timeout_ms)?;
        debug!("<- {} status={} [{}]", resp.command, resp.status, hex::encode(&resp.data));
        resp.expect_command(request.command)?;
        Ok(resp)
    }

    /// Scan the reader field for a tag.
    ///
    /// `LfTagNotFound` yields `ScanError::NoTagPresent` whatever the payload
    /// holds. Other non-success statuses are returned as `Error::Status`.
    pub fn scan(&mut self) -> Result<Credential> {
        let resp = self.execute(&Request::scan())?;
        match resp.status {
            Status::LfTagOk => payload::decode_scan(&resp.data).map_err(|e| {
                warn!("scan returned unreadable tag data: {}", e);
                ScanError::CorruptRead(e).into()
            }),
            Status::LfTagNotFound => Err(ScanError::NoTagPresent.into()),
            status => Err(Error::Status {
                command: Command::HidProxScan,
                status,
            }),
        }
    }

    /// Validate and send a new emulation identity.
    ///
    /// Both ranges are checked before the transport is touched. The
    /// facility code is checked first.
    pub fn set_emulation_identity(&mut self, facility_code: i64, card_number: i64) -> Result<()> {
        let credential = Credential::try_from_raw(facility_code, card_number)?;
        self.set_credential(&credential)
    }

    /// Send an already-validated emulation identity.
    pub fn set_credential(&mut self, credential: &Credential) -> Result<()> {
        let request = Request::set_emu_id(credential, self.config.payload_format);
        let resp = self.execute(&request)?;
        if !resp.status.is_success_for(Command::HidProxSetEmuId) {
            warn!("set emulation identity rejected: {}", resp.status);
        }
        resp.into_success(Command::HidProxSetEmuId)?;
        Ok(())
    }

    /// Read back the identity the device currently emulates.
    pub fn get_emulation_identity(&mut self) -> Result<Credential> {
        let resp = self
            .execute(&Request::get_emu_id())?
            .into_success(Command::HidProxGetEmuId)?;
        let credential = payload::decode_emu_id(&resp.data, self.config.payload_format)?;
        Ok(credential)
    }
}
