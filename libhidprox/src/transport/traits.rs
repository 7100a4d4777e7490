// libhidprox/src/transport/traits.rs

use crate::protocol::{Command, Request, Response};
use crate::Result;

/// Request/response capability the command layer is built on.
///
/// Implementations own delivery, framing, retries and timeouts. Status
/// codes are returned as-is inside the `Response`; only communication
/// faults are reported as `Err`.
pub trait Transport {
    /// Send `command` with `payload` and wait up to `timeout_ms` for the reply.
    fn send_command(&mut self, command: Command, payload: &[u8], timeout_ms: u64)
        -> Result<Response>;

    /// Convenience wrapper for a prepared `Request`.
    fn send_request(&mut self, request: &Request, timeout_ms: u64) -> Result<Response> {
        self.send_command(request.command, &request.payload, timeout_ms)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send_command(
        &mut self,
        command: Command,
        payload: &[u8],
        timeout_ms: u64,
    ) -> Result<Response> {
        (**self).send_command(command, payload, timeout_ms)
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send_command(
        &mut self,
        command: Command,
        payload: &[u8],
        timeout_ms: u64,
    ) -> Result<Response> {
        (**self).send_command(command, payload, timeout_ms)
    }
}
