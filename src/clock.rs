// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Time sources for timestamped output lines.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the local wall-clock time stamped on print, scan and fax lines.
pub trait Clock: Send + Sync {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Clock reading the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that always returns the same instant.
///
/// # Examples
///
/// ```
/// use office_devices::clock::{Clock, FixedClock};
///
/// let clock = FixedClock::at(2024, 12, 31, 23, 59, 0).unwrap();
/// assert_eq!(clock.now().to_string(), "2024-12-31 23:59:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    #[must_use]
    pub const fn new(instant: NaiveDateTime) -> Self {
        Self(instant)
    }

    /// Creates a clock frozen at the given date and time.
    ///
    /// Returns `None` if the components do not form a valid date and time.
    #[must_use]
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, min, sec))
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_frozen() {
        let clock = FixedClock::at(2025, 6, 1, 8, 30, 0).unwrap();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().format("%Y.%m.%d %H:%M:%S").to_string(), "2025.06.01 08:30:00");
    }

    #[test]
    fn fixed_clock_rejects_invalid_date() {
        assert!(FixedClock::at(2025, 2, 30, 0, 0, 0).is_none());
        assert!(FixedClock::at(2025, 1, 1, 24, 0, 0).is_none());
    }

    #[test]
    fn fixed_clock_from_datetime() {
        let instant = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(FixedClock::new(instant).now(), instant);
    }
}
