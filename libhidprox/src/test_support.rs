//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::device::{Device, DeviceConfig};
use crate::protocol::Status;
use crate::transport::mock::MockTransport;

/// Build a MockTransport pre-seeded with echoing replies.
#[doc(hidden)]
pub fn mock_with_replies(replies: Vec<(Status, Vec<u8>)>) -> MockTransport {
    let mut mock = MockTransport::new();
    for (status, data) in replies {
        mock.push_reply(status, data);
    }
    mock
}

/// Convenience: a Device backed by a MockTransport pre-seeded with the
/// provided replies.
#[doc(hidden)]
pub fn mock_device(
    config: DeviceConfig,
    replies: Vec<(Status, Vec<u8>)>,
) -> Device<MockTransport> {
    Device::with_config(mock_with_replies(replies), config)
}
