// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Copier: printer and scanner over one power switch.

use super::sealed::{FromCore, HasCore};
use super::{DeviceBuilder, DeviceCore};
use crate::capabilities::{Capabilities, DeviceKind};
use crate::operation::{Powered, Printable, Scannable};
use crate::state::UsageReport;

/// A device that can print and scan.
///
/// Operations come from the [`Powered`], [`Printable`], [`Scannable`] and
/// [`Copying`](crate::operation::Copying) traits; import them with
/// [`prelude`](crate::prelude).
///
/// # Examples
///
/// ```
/// use office_devices::prelude::*;
/// use office_devices::sink::NullSink;
///
/// let mut copier = Copier::builder().with_sink(NullSink).build();
/// copier.power_on();
///
/// let scanned = copier.scan(FormatType::Pdf).unwrap();
/// assert_eq!(scanned.file_name(), "PDFScan0001.pdf");
///
/// copier.scan_and_print();
/// assert_eq!(copier.scan_count(), 2);
/// assert_eq!(copier.print_count(), 1);
/// ```
#[derive(Debug)]
pub struct Copier {
    core: DeviceCore,
}

impl Copier {
    /// Creates a copier that writes to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for configuring a copier.
    #[must_use]
    pub fn builder() -> DeviceBuilder<Self> {
        DeviceBuilder::new()
    }

    /// Returns the kind of this device.
    #[must_use]
    pub const fn kind(&self) -> DeviceKind {
        DeviceKind::Copier
    }

    /// Returns the operations this device supports.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        Capabilities::copier()
    }

    /// Returns the configured name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.core.name()
    }

    /// Returns a snapshot of the state and counters.
    #[must_use]
    pub fn report(&self) -> UsageReport {
        self.core.report(self.kind())
    }
}

impl Default for Copier {
    fn default() -> Self {
        Self::new()
    }
}

impl HasCore for Copier {
    fn core(&self) -> &DeviceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }
}

impl FromCore for Copier {
    fn from_core(core: DeviceCore) -> Self {
        Self { core }
    }
}

impl Powered for Copier {}

impl Printable for Copier {}

impl Scannable for Copier {}
