// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Printing capability.

use super::Powered;
use crate::event::DeviceEvent;
use crate::types::Document;

/// Devices that can print documents.
pub trait Printable: Powered {
    /// Prints a document.
    ///
    /// | Device | Document | Effect |
    /// |--------|----------|--------|
    /// | off    | any      | nothing |
    /// | on     | `None`   | writes `Print: Cannot print a null document.` |
    /// | on     | `Some`   | increments the print counter, writes `{time} Print: {file}` |
    fn print(&mut self, document: Option<&Document>) {
        let core = self.core_mut();
        if !core.power().is_on() {
            tracing::trace!(device_id = %core.id(), "Print ignored, device is off");
            return;
        }

        let Some(document) = document else {
            core.emit(&DeviceEvent::PrintRejected);
            return;
        };

        core.counters_mut().record_print();
        let event = DeviceEvent::Printed {
            at: core.now(),
            file_name: document.file_name().to_string(),
        };
        core.emit(&event);
    }

    /// Returns the number of printed documents.
    fn print_count(&self) -> u64 {
        self.core().counters().print()
    }
}
