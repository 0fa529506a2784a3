// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Document format types.
//!
//! A [`FormatType`] selects both the kind of [`Document`](super::Document)
//! a scan produces and the file name it is given.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Format of a scanned or stored document.
///
/// # Examples
///
/// ```
/// use office_devices::types::FormatType;
///
/// assert_eq!(FormatType::Pdf.file_name(7), "PDFScan0007.pdf");
/// assert_eq!("jpeg".parse::<FormatType>().unwrap(), FormatType::Image);
/// assert!("bmp".parse::<FormatType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    /// Plain text.
    Text,
    /// PDF document.
    Pdf,
    /// JPEG image. Default format of a scan.
    #[default]
    Image,
}

impl FormatType {
    /// All supported formats.
    pub const ALL: [Self; 3] = [Self::Text, Self::Pdf, Self::Image];

    /// Returns the file name prefix used for scanned documents.
    #[must_use]
    pub const fn file_prefix(&self) -> &'static str {
        match self {
            Self::Text => "TextScan",
            Self::Pdf => "PDFScan",
            Self::Image => "ImageScan",
        }
    }

    /// Returns the file extension, without the leading dot.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Pdf => "pdf",
            Self::Image => "jpg",
        }
    }

    /// Returns the generated file name for the scan with the given number.
    ///
    /// The number is zero-padded to four digits; larger numbers are written
    /// in full.
    #[must_use]
    pub fn file_name(&self, scan_number: u64) -> String {
        format!("{}{scan_number:04}.{}", self.file_prefix(), self.extension())
    }

    /// Infers the format from a file extension.
    ///
    /// Returns `None` for extensions that match no supported format.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(Self::Text),
            "pdf" => Some(Self::Pdf),
            "jpg" | "jpeg" => Some(Self::Image),
            _ => None,
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Pdf => "pdf",
            Self::Image => "image",
        };
        f.write_str(name)
    }
}

impl FromStr for FormatType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "pdf" => Ok(Self::Pdf),
            "jpg" | "jpeg" | "image" => Ok(Self::Image),
            _ => Err(ValueError::UnknownFormat(s.to_string())),
        }
    }
}
