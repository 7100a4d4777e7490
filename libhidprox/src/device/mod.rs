// libhidprox/src/device/mod.rs

//! Device handle plus builder-based configuration.

pub mod builder;
pub mod handle;

pub use builder::{DeviceBuilder, DeviceConfig};
pub use handle::Device;
