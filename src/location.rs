// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Validated observer location.

use crate::error::LocationError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A geographic point on Earth's surface.
///
/// Every constructor validates its input, so a `Location` value never holds
/// out-of-range coordinates or a negative elevation.  Only `latitude` and
/// `elevation` enter the prayer time computation; `longitude`, `timezone` and
/// `name` are carried for collaborators and presentation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "LocationRecord"))]
pub struct Location {
    latitude: f64,
    longitude: f64,
    timezone: String,
    elevation: f64,
    name: String,
}

impl Location {
    /// Name given to locations built without one.
    pub const DEFAULT_NAME: &'static str = "Unknown location";

    /// Timezone label given to locations built without one.
    pub const DEFAULT_TIMEZONE: &'static str = "UTC";

    /// Location at sea level with the default name and timezone label.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        Ok(Self {
            latitude: validate_latitude(latitude)?,
            longitude: validate_longitude(longitude)?,
            timezone: Self::DEFAULT_TIMEZONE.to_owned(),
            elevation: 0.0,
            name: Self::DEFAULT_NAME.to_owned(),
        })
    }

    /// Set the elevation above sea level, in meters.
    pub fn with_elevation(mut self, elevation: f64) -> Result<Self, LocationError> {
        self.elevation = validate_elevation(elevation)?;
        Ok(self)
    }

    /// Set the timezone label.  It is not interpreted by this crate.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Geodetic latitude in degrees, north positive.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, east positive.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Elevation above sea level in meters.
    #[inline]
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.4}°, {:.4}°, {} m)",
            self.name, self.latitude, self.longitude, self.elevation
        )
    }
}

fn validate_latitude(latitude: f64) -> Result<f64, LocationError> {
    if (-90.0..=90.0).contains(&latitude) {
        Ok(latitude)
    } else {
        Err(LocationError::Latitude(latitude))
    }
}

fn validate_longitude(longitude: f64) -> Result<f64, LocationError> {
    if (-180.0..=180.0).contains(&longitude) {
        Ok(longitude)
    } else {
        Err(LocationError::Longitude(longitude))
    }
}

fn validate_elevation(elevation: f64) -> Result<f64, LocationError> {
    if elevation.is_finite() && elevation >= 0.0 {
        Ok(elevation)
    } else {
        Err(LocationError::Elevation(elevation))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

/// Unvalidated wire form of [`Location`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct LocationRecord {
    latitude: f64,
    longitude: f64,
    #[serde(default = "default_timezone")]
    timezone: String,
    #[serde(default)]
    elevation: f64,
    #[serde(default = "default_name")]
    name: String,
}

#[cfg(feature = "serde")]
fn default_timezone() -> String {
    Location::DEFAULT_TIMEZONE.to_owned()
}

#[cfg(feature = "serde")]
fn default_name() -> String {
    Location::DEFAULT_NAME.to_owned()
}

#[cfg(feature = "serde")]
impl TryFrom<LocationRecord> for Location {
    type Error = LocationError;

    fn try_from(record: LocationRecord) -> Result<Self, Self::Error> {
        Ok(Location::new(record.latitude, record.longitude)?
            .with_elevation(record.elevation)?
            .with_timezone(record.timezone)
            .with_name(record.name))
    }
}
