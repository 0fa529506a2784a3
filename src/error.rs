// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `office_devices` library.
//!
//! Device operations themselves never fail: a device that is off, an absent
//! document or a blank recipient simply turn the call into a no-op. The
//! errors in this module only come from parsing value types and from
//! serializing usage reports.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A usage report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors related to parsing value types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A scan format tag is not one of the supported formats.
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),
}

/// A specialized Result type for library operations.
pub type Result<T> = std::result::Result<T, Error>;
