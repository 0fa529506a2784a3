// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-capability usage counters.

use serde::{Deserialize, Serialize};

/// Print, scan and fax counters of one device.
///
/// Each counter is independent of the others and of the power-on count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCounters {
    print: u64,
    scan: u64,
    fax: u64,
}

impl UsageCounters {
    /// Creates counters that are all zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of printed documents.
    #[must_use]
    pub fn print(&self) -> u64 {
        self.print
    }

    /// Number of scans started while the device was on.
    #[must_use]
    pub fn scan(&self) -> u64 {
        self.scan
    }

    /// Number of sent faxes.
    #[must_use]
    pub fn fax(&self) -> u64 {
        self.fax
    }

    pub(crate) fn record_print(&mut self) -> u64 {
        self.print += 1;
        self.print
    }

    pub(crate) fn record_scan(&mut self) -> u64 {
        self.scan += 1;
        self.scan
    }

    pub(crate) fn record_fax(&mut self) -> u64 {
        self.fax += 1;
        self.fax
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_independent() {
        let mut counters = UsageCounters::new();

        assert_eq!(counters.record_scan(), 1);
        assert_eq!(counters.record_scan(), 2);
        assert_eq!(counters.record_print(), 1);

        assert_eq!(counters.print(), 1);
        assert_eq!(counters.scan(), 2);
        assert_eq!(counters.fax(), 0);

        assert_eq!(counters.record_fax(), 1);
        assert_eq!(counters.fax(), 1);
    }
}
