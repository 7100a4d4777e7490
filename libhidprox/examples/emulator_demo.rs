// Scan and emulation-identity walkthrough against the in-memory emulator.
//
// Run with: RUST_LOG=debug cargo run --example emulator_demo

use anyhow::Result;
use libhidprox::prelude::*;
use libhidprox::transport::Emulator;

fn main() -> Result<()> {
    env_logger::init();

    let mut emu = Emulator::new();
    emu.place_tag(Credential::new(123, 45678));
    let mut dev = DeviceBuilder::new().with_transport(emu).build()?;

    println!("=== lf hidprox read ===");
    match dev.scan() {
        Ok(cred) => {
            println!("Facility code: {}", cred.facility_code());
            println!("Card number:   {}", cred.card_number());
            println!("Wiegand frame: {}", hex::encode(encode(&cred)));
        }
        Err(Error::Scan(ScanError::NoTagPresent)) => println!("No HID Prox tag found"),
        Err(e) => return Err(e.into()),
    }

    println!("\n=== lf hidprox econfig ===");
    println!("Current: {}", dev.get_emulation_identity()?);

    dev.set_emulation_identity(100, 9999)?;
    println!("Set:     {}", dev.get_emulation_identity()?);

    // -f 200 only: keep the current card number
    let merged = dev.get_emulation_identity()?.merge(Some(200), None)?;
    dev.set_credential(&merged)?;
    println!("Merged:  {}", dev.get_emulation_identity()?);

    match dev.set_emulation_identity(256, 1) {
        Err(Error::Validation(e)) => println!("Rejected: {}", e),
        other => println!("Unexpected: {:?}", other),
    }

    Ok(())
}
