// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scan-then-print, available on every device that can do both.

use super::{Printable, Scannable};
use crate::types::FormatType;

/// Devices that can copy a document by scanning and printing it.
///
/// Implemented for every type that is both [`Printable`] and [`Scannable`].
pub trait Copying: Printable + Scannable {
    /// Scans an image and prints it.
    ///
    /// Does nothing at all while the device is off. Otherwise behaves
    /// exactly like [`scan`](Scannable::scan) with [`FormatType::Image`]
    /// followed by [`print`](Printable::print) of the result, so both
    /// counters move and both lines are written.
    fn scan_and_print(&mut self) {
        if !self.is_on() {
            return;
        }
        let document = self.scan(FormatType::Image);
        self.print(document.as_ref());
    }
}

impl<T: Printable + Scannable + ?Sized> Copying for T {}
