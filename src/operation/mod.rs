// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device capabilities as traits.
//!
//! Each capability is a trait whose default methods carry the whole
//! behavior. A device type opts into a capability by implementing the
//! trait; the traits are sealed, so only the devices of this crate can.
//!
//! | Trait | Operations | Counter |
//! |-------|------------|---------|
//! | [`Powered`] | `power_on`, `power_off`, `state` | `power_on_count` |
//! | [`Printable`] | `print` | `print_count` |
//! | [`Scannable`] | `scan`, `scan_default`, `scan_tag` | `scan_count` |
//! | [`Faxable`] | `send_fax` | `fax_count` |
//! | [`Copying`] | `scan_and_print` | (print and scan) |
//!
//! Generic code can ask for exactly the capabilities it needs:
//!
//! ```
//! use office_devices::prelude::*;
//! use office_devices::sink::NullSink;
//!
//! fn print_all<P: Printable>(printer: &mut P, documents: &[Document]) {
//!     for document in documents {
//!         printer.print(Some(document));
//!     }
//! }
//!
//! let mut copier = Copier::builder().with_sink(NullSink).build();
//! copier.power_on();
//! print_all(&mut copier, &[Document::text("a.txt"), Document::pdf("b.pdf")]);
//! assert_eq!(copier.print_count(), 2);
//! ```

mod copying;
mod faxable;
mod power;
mod printable;
mod scannable;

pub use copying::Copying;
pub use faxable::Faxable;
pub use power::Powered;
pub use printable::Printable;
pub use scannable::Scannable;
