// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scanning capability.

use super::Powered;
use crate::device::DeviceCore;
use crate::error::ValueError;
use crate::event::DeviceEvent;
use crate::types::{Document, FormatType};

/// Devices that can scan documents.
///
/// Scanned documents are named `{prefix}{n:04}.{ext}` where `n` is the
/// scan counter after the increment, e.g. `ImageScan0001.jpg`.
pub trait Scannable: Powered {
    /// Scans a document in the given format.
    ///
    /// Returns `None` without side effects when the device is off.
    /// Otherwise increments the scan counter, writes
    /// `{time} Scan: {file}` and returns the new document.
    fn scan(&mut self, format: FormatType) -> Option<Document> {
        scan_with(self.core_mut(), Ok(format))
    }

    /// Scans a document in the default format ([`FormatType::Image`]).
    fn scan_default(&mut self) -> Option<Document> {
        self.scan(FormatType::default())
    }

    /// Scans a document in the format named by `tag` (`txt`, `pdf`, `jpg`, ...).
    ///
    /// An unrecognized tag on a running device writes
    /// `Scan: Unknown format. Document not created.` and returns `None`.
    /// The scan counter is incremented before the tag is checked, so such a
    /// call still uses up a scan number.
    fn scan_tag(&mut self, tag: &str) -> Option<Document> {
        scan_with(self.core_mut(), tag.parse())
    }

    /// Returns the number of scans started while the device was on.
    fn scan_count(&self) -> u64 {
        self.core().counters().scan()
    }
}

fn scan_with(core: &mut DeviceCore, format: Result<FormatType, ValueError>) -> Option<Document> {
    if !core.power().is_on() {
        tracing::trace!(device_id = %core.id(), "Scan ignored, device is off");
        return None;
    }

    // The number is taken before the format is validated.
    let number = core.counters_mut().record_scan();

    let format = match format {
        Ok(format) => format,
        Err(e) => {
            tracing::debug!(device_id = %core.id(), error = %e, scan = number, "Scan rejected");
            core.emit(&DeviceEvent::ScanRejected);
            return None;
        }
    };

    let document = Document::new(format.file_name(number), format);
    let event = DeviceEvent::Scanned {
        at: core.now(),
        file_name: document.file_name().to_string(),
    };
    core.emit(&event);
    Some(document)
}
