#[path = "../common/mod.rs"]
mod common;

use libhidprox::protocol::payload::{decode_emu_id, decode_scan, encode_emu_id};
use libhidprox::protocol::{Command, Request};
use libhidprox::types::PayloadFormat;

#[test]
fn summary_and_wiegand_forms_differ() {
    let cred = common::fixtures::sample_credential();
    let summary = encode_emu_id(&cred, PayloadFormat::Summary);
    let wiegand = encode_emu_id(&cred, PayloadFormat::Wiegand);
    assert_eq!(summary, common::fixtures::sample_emu_id_payload());
    assert_eq!(&wiegand[..4], &common::fixtures::sample_frame());
    assert_ne!(&summary[..4], &wiegand[..4]);
}

#[test]
fn set_request_carries_payload() {
    let req = Request::set_emu_id(&common::fixtures::sample_credential(), PayloadFormat::Summary);
    assert_eq!(req.command, Command::HidProxSetEmuId);
    assert_eq!(req.payload, common::fixtures::sample_emu_id_payload());
}

#[test]
fn get_and_scan_payloads_decode() {
    let cred = common::fixtures::sample_credential();
    assert_eq!(
        decode_emu_id(&common::fixtures::sample_emu_id_payload(), PayloadFormat::Summary),
        Ok(cred)
    );
    assert_eq!(decode_scan(&common::fixtures::sample_summary()), Ok(cred));
    assert_eq!(decode_scan(&common::fixtures::sample_frame()), Ok(cred));
}
