// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.
//!
//! [`PowerSwitch`] holds the power state and power-on count,
//! [`UsageCounters`] the per-capability counters, and [`UsageReport`] is a
//! serializable snapshot of both.

mod counters;
mod power_switch;
mod report;

pub use counters::UsageCounters;
pub use power_switch::PowerSwitch;
pub use report::UsageReport;
