// SPDX-License-Identifier: MPL-2.0

//! Office device demonstration.
//!
//! Powers up a multifunctional device, sends a fax (and a fax without a
//! recipient, which is ignored), scans a document with the default format
//! and prints the resulting counters.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example office
//! ```

use office_devices::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut device = MultifunctionalDevice::builder()
        .with_name("demo")
        .build();
    let contract = Document::pdf("contract_v1.pdf");

    device.power_on();
    device.send_fax(Some(&contract), "555-0002");
    device.send_fax(Some(&contract), "");
    println!("Faxes sent: {}", device.fax_count());

    if let Some(scanned) = device.scan_default() {
        println!("Scanned to: {}", scanned.file_name());
    }
    println!("Scans: {}", device.scan_count());

    device.power_off();
    println!("Device state: {}", device.state());

    println!("Total PowerUps: {}", device.power_on_count());
    println!("Total Faxes Sent: {}", device.fax_count());
    println!("Total Scans: {}", device.scan_count());
    println!("Total Prints: {}", device.print_count());

    println!("{}", device.report().to_json_pretty()?);

    Ok(())
}
