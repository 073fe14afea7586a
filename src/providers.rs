// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! External data collaborators.
//!
//! Weather, lunar data and Hijri dates come from outside the crate.  Each is
//! a narrow trait so callers can plug in an HTTP client, a local table or a
//! test stub.  Implementations return [`ProviderError`] values instead of
//! panicking, and a [`WeatherProvider`] must bound its wait and report
//! [`ProviderError::Timeout`].

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::fmt;

use crate::error::ProviderError;
use crate::location::Location;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ── Weather ───────────────────────────────────────────────────────────────

/// Current conditions at a location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherReport {
    /// Air temperature in degrees Celsius.
    pub temperature_c: f64,
    pub description: String,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C, {}", self.temperature_c, self.description)
    }
}

pub trait WeatherProvider: Send + Sync {
    fn fetch(&self, location: &Location) -> Result<WeatherReport, ProviderError>;
}

// ── Moon ──────────────────────────────────────────────────────────────────

/// Lunar phase and rise/set times.
///
/// `moonrise` and `moonset` return `Ok(None)` on days when the Moon does not
/// rise or set at that location.
pub trait MoonProvider: Send + Sync {
    /// Age of the Moon in days of the synodic cycle, in `[0, 29.53)`: 0 at
    /// new moon, about 14.8 at full moon.
    fn phase(&self, instant: DateTime<Utc>) -> Result<f64, ProviderError>;

    fn moonrise(
        &self,
        location: &Location,
        instant: DateTime<Utc>,
    ) -> Result<Option<NaiveTime>, ProviderError>;

    fn moonset(
        &self,
        location: &Location,
        instant: DateTime<Utc>,
    ) -> Result<Option<NaiveTime>, ProviderError>;
}

// ── Hijri calendar ────────────────────────────────────────────────────────

/// A date of the Islamic (Hijri) calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HijriDate {
    pub day: u32,
    pub month_name: String,
    pub year: i32,
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} AH", self.day, self.month_name, self.year)
    }
}

pub trait HijriConverter: Send + Sync {
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, ProviderError>;
}
