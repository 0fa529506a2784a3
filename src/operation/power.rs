// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power control shared by every device.

use crate::device::sealed::HasCore;
use crate::event::{DeviceEvent, DeviceId};
use crate::types::PowerState;

/// Power control and identity of a device.
///
/// All other capabilities build on this trait: their operations only take
/// effect while the device is on.
pub trait Powered: HasCore {
    /// Returns the device identifier.
    fn id(&self) -> DeviceId {
        self.core().id()
    }

    /// Switches the device on.
    ///
    /// Only an off-to-on transition increments the power-on counter and
    /// writes `Device is on ...`. Calling it on a running device does
    /// nothing.
    fn power_on(&mut self) {
        let core = self.core_mut();
        if core.power_mut().turn_on() {
            core.emit(&DeviceEvent::PoweredOn);
        } else {
            tracing::trace!(device_id = %core.id(), "Device already on");
        }
    }

    /// Switches the device off.
    ///
    /// Always writes `... Device is off !`, even if the device was already
    /// off.
    fn power_off(&mut self) {
        let core = self.core_mut();
        core.power_mut().turn_off();
        core.emit(&DeviceEvent::PoweredOff);
    }

    /// Returns the current power state.
    fn state(&self) -> PowerState {
        self.core().power().state()
    }

    /// Returns `true` if the device is on.
    fn is_on(&self) -> bool {
        self.core().power().is_on()
    }

    /// Returns how many times the device went from off to on.
    fn power_on_count(&self) -> u64 {
        self.core().power().power_on_count()
    }
}
