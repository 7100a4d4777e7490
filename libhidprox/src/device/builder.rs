// libhidprox/src/device/builder.rs
//! Builder-style construction of a `Device`.

use crate::constants::DEFAULT_TIMEOUT_MS;
use crate::device::handle::Device;
use crate::transport::Transport;
use crate::types::PayloadFormat;
use crate::{Error, Result};

/// Per-device settings handed to every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceConfig {
    /// Encoding of set/get emulation identity payloads
    pub payload_format: PayloadFormat,
    /// Passed through to the transport on every request
    pub timeout_ms: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            payload_format: PayloadFormat::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder<T: Transport = Box<dyn Transport>> {
    transport: Option<T>,
    config: DeviceConfig,
}

impl<T: Transport> Default for DeviceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> DeviceBuilder<T> {
    /// Builder with default settings and no transport.
    pub fn new() -> Self {
        Self {
            transport: None,
            config: DeviceConfig::default(),
        }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Encoding for set/get emulation identity payloads.
    pub fn payload_format(mut self, format: PayloadFormat) -> Self {
        self.config.payload_format = format;
        self
    }

    /// Per-command timeout handed to the transport.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    /// Replace all settings at once.
    pub fn config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder. A transport is required.
    pub fn build(self) -> Result<Device<T>> {
        match self.transport {
            Some(t) => Ok(Device::with_config(t, self.config)),
            None => Err(Error::Transport("no transport configured".into())),
        }
    }
}
