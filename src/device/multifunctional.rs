// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Multifunctional device: printer, scanner and fax over one power switch.

use super::sealed::{FromCore, HasCore};
use super::{DeviceBuilder, DeviceCore};
use crate::capabilities::{Capabilities, DeviceKind};
use crate::operation::{Faxable, Powered, Printable, Scannable};
use crate::state::UsageReport;

/// A device that can print, scan and fax.
///
/// Shares its gating rules with [`Copier`](crate::Copier) and adds
/// [`Faxable::send_fax`].
///
/// # Examples
///
/// ```
/// use office_devices::prelude::*;
/// use office_devices::sink::MemorySink;
///
/// let output = MemorySink::new();
/// let mut device = MultifunctionalDevice::builder()
///     .with_sink(output.clone())
///     .build();
///
/// let contract = Document::pdf("contract_v1.pdf");
/// device.send_fax(Some(&contract), "555-0002");
/// assert_eq!(device.fax_count(), 0);
///
/// device.power_on();
/// device.send_fax(Some(&contract), "555-0002");
/// device.send_fax(Some(&contract), "   ");
/// assert_eq!(device.fax_count(), 1);
/// assert!(output.contains("Fax: contract_v1.pdf sent to 555-0002"));
/// ```
#[derive(Debug)]
pub struct MultifunctionalDevice {
    core: DeviceCore,
}

impl MultifunctionalDevice {
    /// Creates a device that writes to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for configuring a device.
    #[must_use]
    pub fn builder() -> DeviceBuilder<Self> {
        DeviceBuilder::new()
    }

    /// Returns the kind of this device.
    #[must_use]
    pub const fn kind(&self) -> DeviceKind {
        DeviceKind::Multifunctional
    }

    /// Returns the operations this device supports.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        Capabilities::multifunctional()
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

impl Default for MultifunctionalDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl HasCore for MultifunctionalDevice {
    fn core(&self) -> &DeviceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }
}

impl FromCore for MultifunctionalDevice {
    fn from_core(core: DeviceCore) -> Self {
        Self { core }
    }
}

impl Powered for MultifunctionalDevice {}

impl Printable for MultifunctionalDevice {}

impl Scannable for MultifunctionalDevice {}

impl Faxable for MultifunctionalDevice {}
