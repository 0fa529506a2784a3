// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Concrete office devices.
//!
//! - [`Copier`] - print and scan
//! - [`MultifunctionalDevice`] - print, scan and fax
//!
//! Both own a single [`DeviceCore`] holding the power switch, the counters
//! and the output sink. Use [`SharedDevice`] to hand one device to several
//! threads.

mod base;
mod builder;
mod copier;
mod multifunctional;
pub(crate) mod sealed;
mod shared;

pub use base::DeviceCore;
pub use builder::DeviceBuilder;
pub use copier::Copier;
pub use multifunctional::MultifunctionalDevice;
pub use shared::SharedDevice;
