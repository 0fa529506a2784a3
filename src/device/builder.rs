// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device builder.

use std::fmt;
use std::marker::PhantomData;

use super::DeviceCore;
use super::sealed::FromCore;
use crate::clock::{Clock, SystemClock};
use crate::event::DeviceId;
use crate::sink::{OutputSink, StdoutSink};

/// Builder for configuring a device before use.
///
/// Created with [`Copier::builder`](crate::Copier::builder) or
/// [`MultifunctionalDevice::builder`](crate::MultifunctionalDevice::builder).
/// Unset options default to a random [`DeviceId`], no name, a
/// [`StdoutSink`] and the [`SystemClock`].
///
/// # Examples
///
/// ```
/// use office_devices::clock::FixedClock;
/// use office_devices::prelude::*;
/// use office_devices::sink::MemorySink;
///
/// let output = MemorySink::new();
/// let mut device = MultifunctionalDevice::builder()
///     .with_name("reception")
///     .with_sink(output.clone())
///     .with_clock(FixedClock::at(2025, 5, 4, 9, 0, 0).unwrap())
///     .build();
///
/// device.power_on();
/// assert_eq!(output.lines(), vec!["Device is on ...".to_string()]);
/// assert_eq!(device.name(), Some("reception"));
/// ```
pub struct DeviceBuilder<D> {
    id: Option<DeviceId>,
    name: Option<String>,
    sink: Box<dyn OutputSink>,
    clock: Box<dyn Clock>,
    device: PhantomData<fn() -> D>,
}

impl<D: FromCore> DeviceBuilder<D> {
    pub(crate) fn new() -> Self {
        Self {
            id: None,
            name: None,
            sink: Box::new(StdoutSink),
            clock: Box::new(SystemClock),
            device: PhantomData,
        }
    }

    /// Sets the device identifier instead of generating one.
    #[must_use]
    pub fn with_id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets a human-readable device name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets where the device writes its output lines.
    #[must_use]
    pub fn with_sink(mut self, sink: impl OutputSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Sets the time source for timestamped output lines.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Builds the device. It starts off, with all counters at zero.
    #[must_use]
    pub fn build(self) -> D {
        let id = self.id.unwrap_or_default();
        tracing::debug!(device_id = %id, name = ?self.name, "Building device");
        D::from_core(DeviceCore::new(id, self.name, self.sink, self.clock))
    }
}

impl<D> fmt::Debug for DeviceBuilder<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceBuilder")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
