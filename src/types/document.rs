// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Document values produced by scanners and consumed by printers and faxes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FormatType;

/// A named document in one of the supported formats.
///
/// Devices never look inside a document; they only use its file name.
/// Documents are immutable once created and keep no reference to the
/// device that produced them.
///
/// # Examples
///
/// ```
/// use office_devices::types::{Document, FormatType};
///
/// let doc = Document::pdf("contract_v1.pdf");
/// assert_eq!(doc.file_name(), "contract_v1.pdf");
/// assert_eq!(doc.format(), FormatType::Pdf);
///
/// let inferred = Document::from_file_name("holiday.JPG");
/// assert_eq!(inferred.format(), FormatType::Image);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    file_name: String,
    format: FormatType,
}

impl Document {
    /// Creates a document with an explicit format.
    #[must_use]
    pub fn new(file_name: impl Into<String>, format: FormatType) -> Self {
        Self {
            file_name: file_name.into(),
            format,
        }
    }

    /// Creates a plain text document.
    #[must_use]
    pub fn text(file_name: impl Into<String>) -> Self {
        Self::new(file_name, FormatType::Text)
    }

    /// Creates a PDF document.
    #[must_use]
    pub fn pdf(file_name: impl Into<String>) -> Self {
        Self::new(file_name, FormatType::Pdf)
    }

    /// Creates an image document.
    #[must_use]
    pub fn image(file_name: impl Into<String>) -> Self {
        Self::new(file_name, FormatType::Image)
    }

    /// Creates a document, inferring its format from the file extension.
    ///
    /// Files without a recognized extension are treated as plain text.
    #[must_use]
    pub fn from_file_name(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let format = file_name
            .rsplit_once('.')
            .and_then(|(_, ext)| FormatType::from_extension(ext))
            .unwrap_or(FormatType::Text);
        Self { file_name, format }
    }

    /// Returns the file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the document format.
    #[must_use]
    pub fn format(&self) -> FormatType {
        self.format
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_format() {
        assert_eq!(Document::text("a.txt").format(), FormatType::Text);
        assert_eq!(Document::pdf("a.pdf").format(), FormatType::Pdf);
        assert_eq!(Document::image("a.jpg").format(), FormatType::Image);
    }

    #[test]
    fn from_file_name_infers_format() {
        assert_eq!(
            Document::from_file_name("fax1.pdf").format(),
            FormatType::Pdf
        );
        assert_eq!(
            Document::from_file_name("photo.jpeg").format(),
            FormatType::Image
        );
        assert_eq!(
            Document::from_file_name("notes.txt").format(),
            FormatType::Text
        );
    }

    #[test]
    fn from_file_name_without_known_extension() {
        assert_eq!(Document::from_file_name("README").format(), FormatType::Text);
        assert_eq!(
            Document::from_file_name("sheet.xlsx").format(),
            FormatType::Text
        );
    }

    #[test]
    fn display_is_file_name() {
        assert_eq!(Document::pdf("report.pdf").to_string(), "report.pdf");
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(Document::pdf("report.pdf")).unwrap();
        assert_eq!(json["file_name"], "report.pdf");
        assert_eq!(json["format"], "pdf");
    }
}
