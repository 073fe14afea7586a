// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Prayer Times Module
//!
//! This crate computes the Islamic daily prayer times for a location and date
//! from low-precision solar astronomy.
//!
//! # Core types
//!
//! - [`Location`]: validated geographic point with elevation.
//! - [`CalculationMethod`]: angle policy (asr shadow factor, fajr and isha
//!   depression angles) of a juristic school.
//! - [`JulianDay`] and [`SolarPosition`]: time argument and solar ephemeris.
//! - [`HourAngleSolver`]: inversion of a target sun altitude into an hour angle.
//! - [`PrayerTimes`]: the seven times of a day in fractional UTC hours.
//! - [`PrayerCalculator`] and [`DailyReport`]: method selection by name and
//!   merging with weather, lunar and Hijri collaborators.
//! - [`PrayerTimesCache`]: optional memoisation in front of the engine.
//!
//! # Methods
//!
//! | Key | Asr factor | Fajr | Isha |
//! |-----|------------|------|------|
//! | `standard` | 1 | 18° | 17° |
//! | `hanafi` | 2 | 18° | 18° |
//!
//! # Unreachable angles
//!
//! At high latitudes the Sun may never descend to the fajr/isha depression or
//! never cross the horizon.  The affected fields are `None` and render as
//! [`INVALID_TIME`]; the rest of the day is still computed.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use miqat::{compute_prayer_times, format_hours, ClockFormat, Location, Standard};
//!
//! let amsterdam = Location::new(52.3676, 4.9041)?.with_elevation(2.0)?;
//! let noon = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
//! let times = compute_prayer_times(&amsterdam, noon, &Standard);
//!
//! assert_eq!(format_hours(Some(times.dhuhr), ClockFormat::TwentyFourHour), "12:07");
//! assert_eq!(times.maghrib, times.sunset);
//! # Ok::<(), miqat::Error>(())
//! ```

mod cache;
mod config;
mod engine;
mod ephemeris;
mod error;
mod format;
mod hour_angle;
mod julian;
mod location;
mod method;
mod providers;
mod report;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use cache::PrayerTimesCache;
pub use config::{CalculatorConfig, MethodConfig};
pub use engine::{
    asr_altitude, compute_prayer_times, horizon_correction, times_for_position, Prayer,
    PrayerTimes, EARTH_RADIUS_M, HORIZON_REFRACTION_DEG, SOLAR_DISC_DEG,
};
pub use ephemeris::{orbital_eccentricity, SolarPosition};
pub use error::{Error, FormatError, LocationError, MethodError, ProviderError, Result};
pub use format::{clock_reading, format_hours, ClockFormat, INVALID_TIME};
pub use hour_angle::{HourAngleSolver, DEGREES_PER_HOUR};
pub use julian::JulianDay;
pub use location::Location;
pub use method::{CalculationMethod, CustomMethod, Hanafi, MethodKind, Standard};
pub use providers::{HijriConverter, HijriDate, MoonProvider, WeatherProvider, WeatherReport};
pub use report::{DailyReport, MoonReport, Notice, PrayerCalculator, COLD_THRESHOLD_C};
