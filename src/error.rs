// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.
//!
//! Unreachable sun angles are *not* errors: they are reported as `None`
//! fields of [`PrayerTimes`](crate::PrayerTimes).

use std::time::Duration;
use thiserror::Error;

/// Result type alias for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Rejected [`Location`](crate::Location) fields.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    #[error("latitude must be between -90 and 90 degrees, got {0}")]
    Latitude(f64),

    #[error("longitude must be between -180 and 180 degrees, got {0}")]
    Longitude(f64),

    #[error("elevation must be a non-negative number of meters, got {0}")]
    Elevation(f64),
}

/// Calculation method selection and parameter errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MethodError {
    /// No built-in method is registered under the requested key.
    #[error("unsupported calculation method `{requested}`, choose from: {choices}")]
    Unsupported { requested: String, choices: String },

    /// A custom method parameter is outside its admissible range.
    #[error("invalid {parameter} for calculation method: {value}")]
    InvalidParameter { parameter: &'static str, value: f64 },
}

/// Clock format parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unknown clock format `{0}`, choose from: 24h, 12h")]
    UnknownClockFormat(String),
}

/// Failure reported by an external data provider.
///
/// Providers return these as values; nothing in this crate retries them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("provider did not answer within {0:?}")]
    Timeout(Duration),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Crate-level error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Method(#[from] MethodError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
