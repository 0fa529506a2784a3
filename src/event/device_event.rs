// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device event types.
//!
//! The `Display` output of every event is the exact line a device writes to
//! its [`OutputSink`](crate::sink::OutputSink).

use std::fmt;

use chrono::NaiveDateTime;

/// Timestamp layout of print and scan lines.
pub const PRINT_SCAN_TIME_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Timestamp layout of fax lines. Day first, unlike print and scan.
pub const FAX_TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Something a device did, or refused to do, that produces an output line.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use office_devices::event::DeviceEvent;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 9)
///     .unwrap()
///     .and_hms_opt(14, 5, 0)
///     .unwrap();
///
/// let printed = DeviceEvent::Printed { at, file_name: "a.pdf".into() };
/// assert_eq!(printed.to_string(), "2024.03.09 14:05:00 Print: a.pdf");
///
/// let fax = DeviceEvent::FaxSent {
///     at,
///     file_name: "a.pdf".into(),
///     recipient: "555-0002".into(),
/// };
/// assert_eq!(fax.to_string(), "09.03.2024 14:05:00 Fax: a.pdf sent to 555-0002");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    /// The device went from off to on.
    PoweredOn,

    /// The device was switched off. Emitted even if it already was.
    PoweredOff,

    /// A document was printed.
    Printed {
        /// When the document was printed.
        at: NaiveDateTime,
        /// Name of the printed document.
        file_name: String,
    },

    /// A print was requested without a document.
    PrintRejected,

    /// A document was scanned.
    Scanned {
        /// When the scan completed.
        at: NaiveDateTime,
        /// Generated file name of the scanned document.
        file_name: String,
    },

    /// A scan was requested with a format the device does not know.
    ScanRejected,

    /// A document was faxed.
    FaxSent {
        /// When the fax was sent.
        at: NaiveDateTime,
        /// Name of the faxed document.
        file_name: String,
        /// Number the fax was sent to.
        recipient: String,
    },
}

impl DeviceEvent {
    /// Returns the operation tag of the event (`Power`, `Print`, `Scan`, `Fax`).
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::PoweredOn | Self::PoweredOff => "Power",
            Self::Printed { .. } | Self::PrintRejected => "Print",
            Self::Scanned { .. } | Self::ScanRejected => "Scan",
            Self::FaxSent { .. } => "Fax",
        }
    }

    /// Returns `true` for events reporting a refused operation.
    #[must_use]
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Self::PrintRejected | Self::ScanRejected)
    }

    /// Returns the document file name the event refers to, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::Printed { file_name, .. }
            | Self::Scanned { file_name, .. }
            | Self::FaxSent { file_name, .. } => Some(file_name),
            _ => None,
        }
    }
}

impl fmt::Display for DeviceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoweredOn => f.write_str("Device is on ..."),
            Self::PoweredOff => f.write_str("... Device is off !"),
            Self::Printed { at, file_name } => {
                write!(f, "{} Print: {file_name}", at.format(PRINT_SCAN_TIME_FORMAT))
            }
            Self::PrintRejected => f.write_str("Print: Cannot print a null document."),
            Self::Scanned { at, file_name } => {
                write!(f, "{} Scan: {file_name}", at.format(PRINT_SCAN_TIME_FORMAT))
            }
            Self::ScanRejected => f.write_str("Scan: Unknown format. Document not created."),
            Self::FaxSent {
                at,
                file_name,
                recipient,
            } => write!(
                f,
                "{} Fax: {file_name} sent to {recipient}",
                at.format(FAX_TIME_FORMAT)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap()
    }

    #[test]
    fn power_lines() {
        assert_eq!(DeviceEvent::PoweredOn.to_string(), "Device is on ...");
        assert_eq!(DeviceEvent::PoweredOff.to_string(), "... Device is off !");
    }

    #[test]
    fn print_lines() {
        let event = DeviceEvent::Printed {
            at: at(),
            file_name: "doc.txt".to_string(),
        };
        assert_eq!(event.to_string(), "2025.01.02 03:04:05 Print: doc.txt");
        assert_eq!(
            DeviceEvent::PrintRejected.to_string(),
            "Print: Cannot print a null document."
        );
    }

    #[test]
    fn scan_lines() {
        let event = DeviceEvent::Scanned {
            at: at(),
            file_name: "ImageScan0001.jpg".to_string(),
        };
        assert_eq!(event.to_string(), "2025.01.02 03:04:05 Scan: ImageScan0001.jpg");
        assert_eq!(
            DeviceEvent::ScanRejected.to_string(),
            "Scan: Unknown format. Document not created."
        );
    }

    #[test]
    fn fax_line_uses_day_first_date() {
        let event = DeviceEvent::FaxSent {
            at: at(),
            file_name: "fax1.pdf".to_string(),
            recipient: "111222333".to_string(),
        };
        assert_eq!(
            event.to_string(),
            "02.01.2025 03:04:05 Fax: fax1.pdf sent to 111222333"
        );
    }

    #[test]
    fn tags_and_diagnostics() {
        assert_eq!(DeviceEvent::PoweredOn.tag(), "Power");
        assert_eq!(DeviceEvent::PrintRejected.tag(), "Print");
        assert_eq!(DeviceEvent::ScanRejected.tag(), "Scan");
        assert!(DeviceEvent::PrintRejected.is_diagnostic());
        assert!(DeviceEvent::ScanRejected.is_diagnostic());
        assert!(!DeviceEvent::PoweredOff.is_diagnostic());
    }

    #[test]
    fn file_name_extraction() {
        let event = DeviceEvent::Scanned {
            at: at(),
            file_name: "PDFScan0003.pdf".to_string(),
        };
        assert_eq!(event.file_name(), Some("PDFScan0003.pdf"));
        assert_eq!(DeviceEvent::PoweredOn.file_name(), None);
    }
}
