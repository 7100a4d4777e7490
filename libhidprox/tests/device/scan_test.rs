#[path = "../common/mod.rs"]
mod common;

use libhidprox::device::DeviceConfig;
use libhidprox::protocol::Status;
use libhidprox::{DecodeError, Error, ScanError};

#[test]
fn scan_reports_tag() {
    let mut dev = common::mock_device(
        DeviceConfig::default(),
        vec![(Status::LfTagOk, common::fixtures::sample_summary())],
    );
    assert_eq!(dev.scan().unwrap(), common::fixtures::sample_credential());
}

#[test]
fn scan_without_tag_ignores_payload() {
    let payloads = vec![
        vec![],
        common::fixtures::sample_summary(),
        common::fixtures::sample_frame().to_vec(),
    ];
    for payload in payloads {
        let mut dev = common::mock_device(
            DeviceConfig::default(),
            vec![(Status::LfTagNotFound, payload)],
        );
        assert!(matches!(
            dev.scan(),
            Err(Error::Scan(ScanError::NoTagPresent))
        ));
    }
}

#[test]
fn scan_with_garbled_frame_is_corrupt_read() {
    let mut dev = common::mock_device(
        DeviceConfig::default(),
        vec![(Status::LfTagOk, common::fixtures::corrupted_frame(7))],
    );
    assert!(matches!(
        dev.scan(),
        Err(Error::Scan(ScanError::CorruptRead(
            DecodeError::ParityMismatch { .. }
        )))
    ));
}

#[test]
fn scan_with_truncated_payload_is_corrupt_read() {
    let mut dev = common::mock_device(
        DeviceConfig::default(),
        vec![(Status::LfTagOk, vec![0x7b])],
    );
    assert!(matches!(
        dev.scan(),
        Err(Error::Scan(ScanError::CorruptRead(DecodeError::TooShort {
            expected: 3,
            actual: 1
        })))
    ));
}
