// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power switch with power-on counting.

use serde::{Deserialize, Serialize};

use crate::types::PowerState;

/// Power state of a device together with the number of times it was
/// switched on.
///
/// The counter only moves on a real off-to-on transition. Turning on a
/// device that is already on, or turning it off, leaves it untouched.
///
/// # Examples
///
/// ```
/// use office_devices::state::PowerSwitch;
/// use office_devices::types::PowerState;
///
/// let mut switch = PowerSwitch::new();
/// assert!(switch.turn_on());
/// assert!(!switch.turn_on());
/// assert_eq!(switch.turn_off(), PowerState::On);
/// assert_eq!(switch.power_on_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerSwitch {
    state: PowerState,
    power_on_count: u64,
}

impl PowerSwitch {
    /// Creates a switch that is off and has never been turned on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current power state.
    #[must_use]
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Returns `true` if the switch is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    /// Returns how many times the switch went from off to on.
    #[must_use]
    pub fn power_on_count(&self) -> u64 {
        self.power_on_count
    }

    /// Turns the switch on.
    ///
    /// Returns `true` if the switch was off, `false` if this was a no-op.
    pub fn turn_on(&mut self) -> bool {
        if self.state.is_on() {
            return false;
        }
        self.state = PowerState::On;
        self.power_on_count += 1;
        true
    }

    /// Turns the switch off and returns the state it was in before.
    pub fn turn_off(&mut self) -> PowerState {
        std::mem::replace(&mut self.state, PowerState::Off)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_off_with_zero_count() {
        let switch = PowerSwitch::new();
        assert_eq!(switch.state(), PowerState::Off);
        assert_eq!(switch.power_on_count(), 0);
    }

    #[test]
    fn counts_only_real_transitions() {
        let mut switch = PowerSwitch::new();

        assert!(switch.turn_on());
        assert!(!switch.turn_on());
        assert!(!switch.turn_on());
        assert_eq!(switch.power_on_count(), 1);

        switch.turn_off();
        switch.turn_off();
        assert_eq!(switch.power_on_count(), 1);

        assert!(switch.turn_on());
        assert_eq!(switch.power_on_count(), 2);
    }

    #[test]
    fn turn_off_reports_previous_state() {
        let mut switch = PowerSwitch::new();
        assert_eq!(switch.turn_off(), PowerState::Off);

        switch.turn_on();
        assert_eq!(switch.turn_off(), PowerState::On);
        assert!(!switch.is_on());
    }
}
