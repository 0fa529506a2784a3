// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State shared by every device kind.

use std::fmt;

use chrono::NaiveDateTime;

use crate::capabilities::DeviceKind;
use crate::clock::Clock;
use crate::event::{DeviceEvent, DeviceId};
use crate::sink::OutputSink;
use crate::state::{PowerSwitch, UsageCounters, UsageReport};

/// Identity, power switch, counters and output of one device.
///
/// Every device wraps exactly one core. The capability traits in
/// [`operation`](crate::operation) read and update it; from the outside it
/// is read-only.
pub struct DeviceCore {
    id: DeviceId,
    name: Option<String>,
    power: PowerSwitch,
    counters: UsageCounters,
    sink: Box<dyn OutputSink>,
    clock: Box<dyn Clock>,
}

impl DeviceCore {
    pub(crate) fn new(
        id: DeviceId,
        name: Option<String>,
        sink: Box<dyn OutputSink>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            id,
            name,
            power: PowerSwitch::new(),
            counters: UsageCounters::new(),
            sink,
            clock,
        }
    }

    /// Returns the device identifier.
    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Returns the device name, if one was configured.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the power switch.
    #[must_use]
    pub fn power(&self) -> &PowerSwitch {
        &self.power
    }

    /// Returns the usage counters.
    #[must_use]
    pub fn counters(&self) -> &UsageCounters {
        &self.counters
    }

    pub(crate) fn power_mut(&mut self) -> &mut PowerSwitch {
        &mut self.power
    }

    pub(crate) fn counters_mut(&mut self) -> &mut UsageCounters {
        &mut self.counters
    }

    pub(crate) fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Writes the event's line to the sink.
    ///
    /// Sink failures are logged and dropped; device operations never fail.
    pub(crate) fn emit(&mut self, event: &DeviceEvent) {
        let line = event.to_string();
        tracing::debug!(device_id = %self.id, tag = event.tag(), line = %line, "Device event");

        if let Err(e) = self.sink.write_line(&line) {
            tracing::warn!(device_id = %self.id, error = %e, "Failed to write device output");
        }
    }

    pub(crate) fn report(&self, kind: DeviceKind) -> UsageReport {
        let capabilities = kind.capabilities();
        UsageReport {
            device_id: self.id,
            name: self.name.clone(),
            kind,
            capabilities,
            state: self.power.state(),
            power_on_count: self.power.power_on_count(),
            print_count: self.counters.print(),
            scan_count: self.counters.scan(),
            fax_count: capabilities.supports_fax().then_some(self.counters.fax()),
        }
    }
}

impl fmt::Debug for DeviceCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceCore")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("power", &self.power)
            .field("counters", &self.counters)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::clock::FixedClock;
    use crate::sink::MemorySink;
    use crate::types::PowerState;

    struct FailingSink;

    impl OutputSink for FailingSink {
        fn write_line(&mut self, _line: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn clock() -> Box<dyn Clock> {
        Box::new(FixedClock::at(2025, 1, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn new_core_is_off_and_unused() {
        let core = DeviceCore::new(DeviceId::new(), None, Box::new(MemorySink::new()), clock());
        assert_eq!(core.power().state(), PowerState::Off);
        assert_eq!(core.power().power_on_count(), 0);
        assert_eq!(*core.counters(), UsageCounters::new());
    }

    #[test]
    fn emit_writes_event_line() {
        let sink = MemorySink::new();
        let mut core = DeviceCore::new(DeviceId::new(), None, Box::new(sink.clone()), clock());

        core.emit(&DeviceEvent::PoweredOn);

        assert_eq!(sink.lines(), vec!["Device is on ...".to_string()]);
    }

    #[test]
    fn emit_survives_failing_sink() {
        let mut core = DeviceCore::new(DeviceId::new(), None, Box::new(FailingSink), clock());
        core.emit(&DeviceEvent::PoweredOff);
    }

    #[test]
    fn report_hides_fax_for_copier() {
        let core = DeviceCore::new(
            DeviceId::new(),
            Some("lobby".to_string()),
            Box::new(MemorySink::new()),
            clock(),
        );

        let report = core.report(DeviceKind::Copier);
        assert_eq!(report.fax_count, None);
        assert_eq!(report.name.as_deref(), Some("lobby"));

        let report = core.report(DeviceKind::Multifunctional);
        assert_eq!(report.fax_count, Some(0));
    }
}
