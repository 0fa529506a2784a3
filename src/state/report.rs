// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Usage report snapshots.

use serde::{Deserialize, Serialize};

use crate::capabilities::{Capabilities, DeviceKind};
use crate::error::Result;
use crate::event::DeviceId;
use crate::types::PowerState;

/// Point-in-time snapshot of a device's state and counters.
///
/// Obtained from `report()` on a device. The fax count is only present for
/// devices that can fax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageReport {
    /// Identifier of the reported device.
    pub device_id: DeviceId,
    /// Optional human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Kind of device.
    pub kind: DeviceKind,
    /// Operations the device supports.
    pub capabilities: Capabilities,
    /// Power state at the time of the report.
    pub state: PowerState,
    /// Number of off-to-on transitions.
    pub power_on_count: u64,
    /// Number of printed documents.
    pub print_count: u64,
    /// Number of scans started while on.
    pub scan_count: u64,
    /// Number of sent faxes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax_count: Option<u64>,
}

impl UsageReport {
    /// Serializes the report as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`](crate::Error::Serialization) if
    /// serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the report as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`](crate::Error::Serialization) if
    /// serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
