// libhidprox/src/transport/mod.rs
//! Ways of delivering commands to a device.

#[cfg(feature = "emulator")]
pub mod emulator;
/// Scripted transport for tests
pub mod mock;
/// The `Transport` trait
pub mod traits;

#[cfg(feature = "emulator")]
pub use emulator::Emulator;
pub use mock::MockTransport;
pub use traits::Transport;
