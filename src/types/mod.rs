// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by all devices.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off state gating every device operation
//! - [`FormatType`] - Text, PDF or image; selects scan file names
//! - [`Document`] - Named document handed between devices

mod document;
mod format;
mod power;

pub use document::Document;
pub use format::FormatType;
pub use power::PowerState;
