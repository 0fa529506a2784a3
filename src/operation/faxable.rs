// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fax capability.

use super::Powered;
use crate::event::DeviceEvent;
use crate::types::Document;

/// Devices that can send faxes.
pub trait Faxable: Powered {
    /// Faxes a document to `recipient`.
    ///
    /// The fax is only sent when the device is on, a document is given and
    /// the recipient is not empty or whitespace. Then the fax counter is
    /// incremented and `{dd.MM.yyyy HH:mm:ss} Fax: {file} sent to {recipient}`
    /// is written. In every other case nothing happens and nothing is
    /// written.
    fn send_fax(&mut self, document: Option<&Document>, recipient: &str) {
        let core = self.core_mut();
        if !core.power().is_on() {
            tracing::trace!(device_id = %core.id(), "Fax ignored, device is off");
            return;
        }
        let Some(document) = document else {
            tracing::trace!(device_id = %core.id(), "Fax ignored, no document");
            return;
        };
        if recipient.trim().is_empty() {
            tracing::trace!(device_id = %core.id(), "Fax ignored, blank recipient");
            return;
        }

        core.counters_mut().record_fax();
        let event = DeviceEvent::FaxSent {
            at: core.now(),
            file_name: document.file_name().to_string(),
            recipient: recipient.to_string(),
        };
        core.emit(&event);
    }

    /// Returns the number of sent faxes.
    fn fax_count(&self) -> u64 {
        self.core().counters().fax()
    }
}
