// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `office_devices` - Office device models with power gating and usage counters.
//!
//! This library models a copier (printer + scanner) and a multifunctional
//! device (printer + scanner + fax). Every device owns one power switch;
//! each operation checks it, updates its own counter exactly once on
//! success and writes one line to the device's output sink.
//!
//! # Supported Features
//!
//! - **Power control**: off-to-on transitions are counted, redundant
//!   power-ons are ignored
//! - **Printing**: documents are printed only while on; a missing document
//!   is reported
//! - **Scanning**: generated file names such as `ImageScan0001.jpg` in text,
//!   PDF or image format
//! - **Faxing**: sent only with a document and a non-blank recipient
//! - **Reports**: serializable usage snapshots
//! - **Sharing**: [`SharedDevice`] serializes access from several threads
//!
//! # Quick Start
//!
//! ```
//! use office_devices::prelude::*;
//! use office_devices::sink::MemorySink;
//!
//! let output = MemorySink::new();
//! let mut device = MultifunctionalDevice::builder()
//!     .with_sink(output.clone())
//!     .build();
//!
//! device.power_on();
//! let scanned = device.scan(FormatType::Image);
//! assert_eq!(scanned.as_ref().map(Document::file_name), Some("ImageScan0001.jpg"));
//!
//! device.print(scanned.as_ref());
//! device.send_fax(scanned.as_ref(), "555-1234");
//! device.power_off();
//!
//! assert_eq!(device.print_count(), 1);
//! assert_eq!(device.fax_count(), 1);
//! assert_eq!(output.lines().last().map(String::as_str), Some("... Device is off !"));
//! ```
//!
//! # Output
//!
//! Devices write to standard output unless configured otherwise through
//! [`DeviceBuilder::with_sink`]. Diagnostics are additionally reported via
//! `tracing`; the library never installs a subscriber.

mod capabilities;
pub mod clock;
pub mod device;
pub mod error;
pub mod event;
pub mod operation;
pub mod sink;
pub mod state;
pub mod types;

pub use capabilities::{Capabilities, DeviceKind};
pub use device::{Copier, DeviceBuilder, MultifunctionalDevice, SharedDevice};
pub use error::{Error, Result, ValueError};
pub use types::{Document, FormatType, PowerState};

/// Everything needed to build devices and call their operations.
pub mod prelude {
    pub use crate::device::{Copier, MultifunctionalDevice, SharedDevice};
    pub use crate::operation::{Copying, Faxable, Powered, Printable, Scannable};
    pub use crate::types::{Document, FormatType, PowerState};
}
