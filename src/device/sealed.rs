// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Crate-private supertraits. Only devices defined in this crate can
//! implement the capability traits.

use super::DeviceCore;

/// Access to the device core behind a device.
pub trait HasCore {
    fn core(&self) -> &DeviceCore;

    fn core_mut(&mut self) -> &mut DeviceCore;
}

/// Construction of a device from a configured core.
pub trait FromCore {
    fn from_core(core: DeviceCore) -> Self;
}
