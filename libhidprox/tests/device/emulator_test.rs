#[path = "../common/mod.rs"]
mod common;

use libhidprox::device::DeviceBuilder;
use libhidprox::transport::Emulator;
use libhidprox::types::{Credential, PayloadFormat};
use libhidprox::{Error, ScanError};

#[test]
fn scan_through_emulator_field() {
    let mut emu = Emulator::new();
    emu.place_tag(common::fixtures::sample_credential());
    let mut dev = DeviceBuilder::new().with_transport(emu).build().unwrap();
    assert_eq!(dev.scan().unwrap(), common::fixtures::sample_credential());

    dev.transport_mut().remove_tag();
    assert!(matches!(
        dev.scan(),
        Err(Error::Scan(ScanError::NoTagPresent))
    ));

    dev.transport_mut()
        .place_raw(common::fixtures::corrupted_frame(20));
    assert!(matches!(
        dev.scan(),
        Err(Error::Scan(ScanError::CorruptRead(_)))
    ));
}

#[test]
fn identity_lands_in_active_slot() {
    let mut emu = Emulator::new();
    emu.set_active_slot(2).unwrap();
    let mut dev = DeviceBuilder::new().with_transport(emu).build().unwrap();

    assert_eq!(
        dev.get_emulation_identity().unwrap(),
        Credential::factory_default(2)
    );
    dev.set_emulation_identity(7, 7777).unwrap();

    let emu = dev.into_transport();
    assert_eq!(emu.identity(2).unwrap(), Credential::new(7, 7777));
    assert_eq!(emu.identity(0).unwrap(), Credential::factory_default(0));

    let mut record = [0u8; 4];
    emu.save_slot(2, &mut record).unwrap();
    assert_eq!(record, [7, 0, 0x61, 0x1e]);
}

#[test]
fn emulator_rejects_wiegand_format_payload() {
    let mut dev = DeviceBuilder::new()
        .with_transport(Emulator::new())
        .payload_format(PayloadFormat::Wiegand)
        .build()
        .unwrap();
    assert!(matches!(
        dev.set_emulation_identity(1, 1),
        Err(Error::Status { .. })
    ));
}

#[test]
fn firmware_saved_record_loads_into_slot() {
    let mut emu = Emulator::new();
    emu.load_slot(0, &[0x7b, 0x00, 0x6e, 0xb2]).unwrap();
    let mut dev = DeviceBuilder::new().with_transport(emu).build().unwrap();
    assert_eq!(
        dev.get_emulation_identity().unwrap(),
        Credential::new(123, 45678)
    );

    let mut record = [0u8; 4];
    dev.transport().save_slot(1, &mut record).unwrap();
    assert_eq!(record, [0x00, 0x00, 0xd3, 0x04]);
}
