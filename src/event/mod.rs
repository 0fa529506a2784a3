// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device events and identifiers.
//!
//! Every output line a device writes is a formatted [`DeviceEvent`]. Events
//! are also reported through `tracing` together with the [`DeviceId`] of
//! the device that emitted them.

mod device_event;
mod device_id;

pub use device_event::{DeviceEvent, FAX_TIME_FORMAT, PRINT_SCAN_TIME_FORMAT};
pub use device_id::DeviceId;
