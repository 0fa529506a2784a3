// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device capability descriptors.
//!
//! The operations a device can perform are fixed by its type: a
//! [`Copier`](crate::Copier) prints and scans, a
//! [`MultifunctionalDevice`](crate::MultifunctionalDevice) also faxes.
//! [`Capabilities`] describes that set as plain data so it can be shown
//! or serialized; [`DeviceKind`] names the device type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operations supported by a device.
///
/// # Examples
///
/// ```
/// use office_devices::Capabilities;
///
/// let copier = Capabilities::copier();
/// assert!(copier.supports_print());
/// assert!(!copier.supports_fax());
/// assert_eq!(copier.to_string(), "print+scan");
///
/// assert!(Capabilities::multifunctional().supports_fax());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Capabilities {
    /// Can print documents.
    pub print: bool,

    /// Can scan documents.
    pub scan: bool,

    /// Can send faxes.
    pub fax: bool,
}

impl Capabilities {
    /// Capabilities of a copier: print and scan.
    #[must_use]
    pub const fn copier() -> Self {
        Self {
            print: true,
            scan: true,
            fax: false,
        }
    }

    /// Capabilities of a multifunctional device: print, scan and fax.
    #[must_use]
    pub const fn multifunctional() -> Self {
        Self {
            print: true,
            scan: true,
            fax: true,
        }
    }

    /// Returns whether the device can print.
    #[must_use]
    pub const fn supports_print(&self) -> bool {
        self.print
    }

    /// Returns whether the device can scan.
    #[must_use]
    pub const fn supports_scan(&self) -> bool {
        self.scan
    }

    /// Returns whether the device can send faxes.
    #[must_use]
    pub const fn supports_fax(&self) -> bool {
        self.fax
    }

    /// Returns whether the device can scan and then print the result.
    #[must_use]
    pub const fn supports_copy(&self) -> bool {
        self.print && self.scan
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [(self.print, "print"), (self.scan, "scan"), (self.fax, "fax")]
            .into_iter()
            .filter_map(|(enabled, name)| enabled.then_some(name))
            .collect();

        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&names.join("+"))
        }
    }
}

/// Kind of office device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// Printer and scanner.
    Copier,
    /// Printer, scanner and fax.
    Multifunctional,
}

impl DeviceKind {
    /// Returns the capabilities every device of this kind has.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        match self {
            Self::Copier => Capabilities::copier(),
            Self::Multifunctional => Capabilities::multifunctional(),
        }
    }

    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Copier => "copier",
            Self::Multifunctional => "multifunctional",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capabilities_are_empty() {
        let caps = Capabilities::default();
        assert!(!caps.supports_print());
        assert!(!caps.supports_scan());
        assert!(!caps.supports_fax());
        assert_eq!(caps.to_string(), "none");
    }

    #[test]
    fn copier_capabilities() {
        let caps = Capabilities::copier();
        assert!(caps.supports_print());
        assert!(caps.supports_scan());
        assert!(!caps.supports_fax());
        assert!(caps.supports_copy());
    }

    #[test]
    fn multifunctional_capabilities() {
        let caps = Capabilities::multifunctional();
        assert!(caps.supports_fax());
        assert!(caps.supports_copy());
        assert_eq!(caps.to_string(), "print+scan+fax");
    }

    #[test]
    fn copy_needs_print_and_scan() {
        let scan_only = Capabilities {
            scan: true,
            ..Capabilities::default()
        };
        assert!(!scan_only.supports_copy());
        assert_eq!(scan_only.to_string(), "scan");
    }

    #[test]
    fn kind_maps_to_capabilities() {
        assert_eq!(DeviceKind::Copier.capabilities(), Capabilities::copier());
        assert_eq!(
            DeviceKind::Multifunctional.capabilities(),
            Capabilities::multifunctional()
        );
        assert_eq!(DeviceKind::Multifunctional.to_string(), "multifunctional");
    }
}
