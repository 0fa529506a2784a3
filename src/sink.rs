// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Output sinks for device log lines.
//!
//! Each device owns one sink and writes one line per emitted
//! [`DeviceEvent`](crate::event::DeviceEvent). Swapping the sink redirects
//! a single device's output without touching process-wide state.
//!
//! # Available Sinks
//!
//! - [`StdoutSink`] - Writes to standard output (the default)
//! - [`MemorySink`] - Collects lines in memory, shareable between clones
//! - [`WriterSink`] - Wraps any [`std::io::Write`]
//! - [`NullSink`] - Discards everything

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Destination for device output lines.
///
/// Implementations receive lines without a trailing newline.
pub trait OutputSink: Send {
    /// Writes one line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the line could not be written. Devices log
    /// and otherwise ignore these errors.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Sink writing to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")
    }
}

/// Sink discarding every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn write_line(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Sink wrapping an arbitrary writer.
///
/// # Examples
///
/// ```
/// use office_devices::sink::{OutputSink, WriterSink};
///
/// let mut sink = WriterSink::new(Vec::new());
/// sink.write_line("Device is on ...").unwrap();
/// assert_eq!(sink.into_inner(), b"Device is on ...\n");
/// ```
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wraps the given writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }
}

/// Sink collecting lines in memory.
///
/// Clones share the same buffer, so a test can hand one clone to a device
/// and read the output back through another.
///
/// # Examples
///
/// ```
/// use office_devices::sink::{MemorySink, OutputSink};
///
/// let sink = MemorySink::new();
/// let mut writer = sink.clone();
/// writer.write_line("... Device is off !").unwrap();
///
/// assert_eq!(sink.lines(), vec!["... Device is off !".to_string()]);
/// assert!(sink.contains("off"));
/// ```
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all collected lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Returns all collected lines joined with newlines.
    #[must_use]
    pub fn contents(&self) -> String {
        self.lines.lock().join("\n")
    }

    /// Returns `true` if any collected line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|line| line.contains(needle))
    }

    /// Returns the number of collected lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Removes and returns all collected lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl fmt::Debug for MemorySink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySink")
            .field("lines", &self.len())
            .finish()
    }
}

impl OutputSink for MemorySink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_clones_share_buffer() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();

        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.contents(), "first\nsecond");
    }

    #[test]
    fn memory_sink_take_empties_buffer() {
        let sink = MemorySink::new();
        sink.clone().write_line("line").unwrap();

        assert_eq!(sink.take(), vec!["line".to_string()]);
        assert!(sink.is_empty());
    }

    #[test]
    fn memory_sink_contains() {
        let sink = MemorySink::new();
        sink.clone().write_line("2025.01.01 10:00:00 Print: a.txt").unwrap();

        assert!(sink.contains("Print:"));
        assert!(!sink.contains("Fax:"));
    }

    #[test]
    fn writer_sink_appends_newlines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line("a").unwrap();
        sink.write_line("b").unwrap();
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "a\nb\n");
    }

    #[test]
    fn null_sink_accepts_everything() {
        let mut sink = NullSink;
        assert!(sink.write_line("ignored").is_ok());
    }
}
