#[path = "../common/mod.rs"]
mod common;

use libhidprox::device::{Device, DeviceConfig};
use libhidprox::protocol::Status;
use libhidprox::transport::Emulator;
use libhidprox::types::{Credential, Field};
use libhidprox::{Error, ValidationError};

#[test]
fn set_then_get_roundtrip_via_emulator() {
    let mut dev = Device::new(Emulator::new());
    dev.set_emulation_identity(200, 12345).unwrap();
    assert_eq!(
        dev.get_emulation_identity().unwrap(),
        Credential::new(200, 12345)
    );
}

#[test]
fn boundary_values_accepted() {
    let mut dev = Device::new(Emulator::new());

    dev.set_emulation_identity(0, 0).unwrap();
    assert_eq!(dev.get_emulation_identity().unwrap(), Credential::new(0, 0));

    dev.set_emulation_identity(255, 65535).unwrap();
    assert_eq!(
        dev.get_emulation_identity().unwrap(),
        Credential::new(255, 65535)
    );
}

#[test]
fn out_of_range_never_reaches_transport() {
    let mut dev = common::mock_device(DeviceConfig::default(), vec![]);
    let cases = [
        (256, 12345, Field::FacilityCode),
        (-1, 12345, Field::FacilityCode),
        (123, 65536, Field::CardNumber),
        (123, -1, Field::CardNumber),
    ];
    for (fc, cn, expected) in cases {
        match dev.set_emulation_identity(fc, cn) {
            Err(Error::Validation(ValidationError::OutOfRange { field, .. })) => {
                assert_eq!(field, expected)
            }
            other => panic!("({}, {}): expected OutOfRange, got {:?}", fc, cn, other),
        }
    }
    assert!(dev.transport().sent.is_empty());
}

#[test]
fn partial_update_is_get_merge_set() {
    let mut dev = Device::new(Emulator::new());
    dev.set_emulation_identity(123, 45678).unwrap();

    // change only the facility code
    let merged = dev
        .get_emulation_identity()
        .unwrap()
        .merge(Some(200), None)
        .unwrap();
    dev.set_credential(&merged).unwrap();
    assert_eq!(
        dev.get_emulation_identity().unwrap(),
        Credential::new(200, 45678)
    );

    // change only the card number
    let merged = dev
        .get_emulation_identity()
        .unwrap()
        .merge(None, Some(12345))
        .unwrap();
    dev.set_credential(&merged).unwrap();
    assert_eq!(
        dev.get_emulation_identity().unwrap(),
        Credential::new(200, 12345)
    );
}

#[test]
fn device_rejection_is_not_swallowed() {
    let mut dev = common::mock_device(
        DeviceConfig::default(),
        vec![(Status::FlashWriteFail, vec![])],
    );
    assert!(matches!(
        dev.set_emulation_identity(1, 2),
        Err(Error::Status {
            status: Status::FlashWriteFail,
            ..
        })
    ));
}
