// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serialized access to a device from several callers.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

/// A device shared between threads.
///
/// Device operations check the power state and then update a counter.
/// Wrapping the device here runs each call under one lock, so concurrent
/// callers never interleave inside an operation. Clones share the device.
///
/// # Examples
///
/// ```
/// use std::thread;
///
/// use office_devices::SharedDevice;
/// use office_devices::prelude::*;
/// use office_devices::sink::NullSink;
///
/// let device = SharedDevice::new(Copier::builder().with_sink(NullSink).build());
/// device.with(|copier| copier.power_on());
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let device = device.clone();
///         thread::spawn(move || {
///             device.with(|copier| copier.print(Some(&Document::text("a.txt"))));
///         })
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(device.with(|copier| copier.print_count()), 4);
/// ```
pub struct SharedDevice<D> {
    inner: Arc<Mutex<D>>,
}

impl<D> SharedDevice<D> {
    /// Wraps a device for shared use.
    #[must_use]
    pub fn new(device: D) -> Self {
        Self {
            inner: Arc::new(Mutex::new(device)),
        }
    }

    /// Runs `f` with exclusive access to the device.
    ///
    /// Several operations inside one closure run without interruption.
    pub fn with<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Locks the device until the returned guard is dropped.
    #[must_use]
    pub fn lock(&self) -> MutexGuard<'_, D> {
        self.inner.lock()
    }

    /// Returns the device if this is the last handle to it.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged if other clones are still alive.
    pub fn try_unwrap(self) -> Result<D, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<D> Clone for SharedDevice<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D> From<D> for SharedDevice<D> {
    fn from(device: D) -> Self {
        Self::new(device)
    }
}

impl<D> fmt::Debug for SharedDevice<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedDevice")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::device::MultifunctionalDevice;
    use crate::operation::{Faxable, Powered, Scannable};
    use crate::sink::MemorySink;
    use crate::types::Document;

    #[test]
    fn concurrent_scans_get_unique_numbers() {
        let sink = MemorySink::new();
        let device = SharedDevice::new(
            MultifunctionalDevice::builder()
                .with_sink(sink.clone())
                .build(),
        );
        device.with(Powered::power_on);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let device = device.clone();
                thread::spawn(move || {
                    (0..25)
                        .filter_map(|_| device.with(Scannable::scan_default))
                        .map(|doc| doc.file_name().to_string())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut names: Vec<String> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        names.sort();
        names.dedup();

        assert_eq!(names.len(), 200);
        assert_eq!(device.with(|d| d.scan_count()), 200);
    }

    #[test]
    fn with_runs_sequence_atomically() {
        let device = SharedDevice::new(
            MultifunctionalDevice::builder()
                .with_sink(MemorySink::new())
                .build(),
        );

        device.with(|d| {
            d.power_on();
            d.send_fax(Some(&Document::pdf("a.pdf")), "100");
            d.power_off();
        });

        let guard = device.lock();
        assert_eq!(guard.fax_count(), 1);
        assert!(!guard.is_on());
    }

    #[test]
    fn try_unwrap_last_handle() {
        let device = SharedDevice::new(MultifunctionalDevice::builder().build());
        let other = device.clone();

        let device = device.try_unwrap().unwrap_err();
        drop(other);
        assert!(device.try_unwrap().is_ok());
    }
}
