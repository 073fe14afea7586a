// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Prayer time engine.
//!
//! All times are fractional hours of the UTC day.  Solar noon is taken as
//! `12 − EoT/60`; the other times are offsets from it obtained by inverting
//! the Sun's altitude with [`HourAngleSolver`]:
//!
//! | Time | Target altitude | Side |
//! |------|-----------------|------|
//! | Fajr | `−fajr_angle` | morning |
//! | Sunrise | `−(0.8333° + refraction + dip)` | morning |
//! | Dhuhr | meridian transit | noon |
//! | Asr | `acot(asr_factor + tan|φ − δ|)` | afternoon |
//! | Sunset / Maghrib | `−(0.8333° + refraction + dip)` | evening |
//! | Isha | `−isha_angle` | evening |

use chrono::{DateTime, Utc};

use crate::ephemeris::SolarPosition;
use crate::format::{format_hours, ClockFormat};
use crate::hour_angle::HourAngleSolver;
use crate::julian::JulianDay;
use crate::location::Location;
use crate::method::CalculationMethod;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean Earth radius used for the horizon dip, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Atmospheric refraction allowance at the horizon, in degrees.
pub const HORIZON_REFRACTION_DEG: f64 = 0.0347;

/// Apparent solar semi-diameter plus standard refraction, in degrees.
pub const SOLAR_DISC_DEG: f64 = 0.8333;

/// The seven named times of a prayer day, in chronological order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 7] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Sunset,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Lower-case key, e.g. `"fajr"`.
    pub const fn key(self) -> &'static str {
        match self {
            Prayer::Fajr => "fajr",
            Prayer::Sunrise => "sunrise",
            Prayer::Dhuhr => "dhuhr",
            Prayer::Asr => "asr",
            Prayer::Sunset => "sunset",
            Prayer::Maghrib => "maghrib",
            Prayer::Isha => "isha",
        }
    }
}

impl std::fmt::Display for Prayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Sunset => "Sunset",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        };
        f.write_str(name)
    }
}

/// Prayer times of one day as fractional UTC hours in `[0, 24)`.
///
/// `None` marks a time whose sun angle is never reached at that latitude and
/// date.  `dhuhr` always exists, and `maghrib` always equals `sunset`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrayerTimes {
    pub fajr: Option<f64>,
    pub sunrise: Option<f64>,
    pub dhuhr: f64,
    pub asr: Option<f64>,
    pub sunset: Option<f64>,
    pub maghrib: Option<f64>,
    pub isha: Option<f64>,
}

impl PrayerTimes {
    /// Time of one prayer.
    pub fn get(&self, prayer: Prayer) -> Option<f64> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => Some(self.dhuhr),
            Prayer::Asr => self.asr,
            Prayer::Sunset => self.sunset,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// All seven times in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, Option<f64>)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Prayers whose sun angle is unreachable.
    pub fn unreachable(&self) -> Vec<Prayer> {
        self.iter()
            .filter_map(|(p, t)| t.is_none().then_some(p))
            .collect()
    }

    /// Every time rendered as a clock string.
    pub fn formatted(&self, format: ClockFormat) -> Vec<(Prayer, String)> {
        self.iter()
            .map(|(p, t)| (p, format_hours(t, format)))
            .collect()
    }
}

/// Depression of the visible horizon: refraction plus the geometric dip for
/// an observer `elevation` meters above the surface, in degrees.
pub fn horizon_correction(elevation: f64) -> f64 {
    let dip = if elevation > 0.0 {
        (EARTH_RADIUS_M / (EARTH_RADIUS_M + elevation))
            .acos()
            .to_degrees()
    } else {
        0.0
    };
    HORIZON_REFRACTION_DEG + dip
}

/// Sun altitude at Asr for the given shadow factor, in degrees.
///
/// The shadow of a vertical gnomon equals `asr_factor` gnomon lengths plus its
/// noon shadow `tan|φ − δ|` when the Sun stands at `acot(asr_factor + tan|φ − δ|)`.
pub fn asr_altitude(asr_factor: f64, latitude: f64, declination: f64) -> f64 {
    let noon_shadow = (latitude - declination).abs().to_radians().tan();
    (1.0 / (asr_factor + noon_shadow)).atan().to_degrees()
}

/// Prayer times for `location` on the UTC day containing `instant`.
///
/// The solar position is evaluated at `instant` itself.  This never fails:
/// unreachable angles come back as `None` fields.
pub fn compute_prayer_times<M>(
    location: &Location,
    instant: DateTime<Utc>,
    method: &M,
) -> PrayerTimes
where
    M: CalculationMethod + ?Sized,
{
    let position = SolarPosition::at(JulianDay::from_utc(instant));
    let times = times_for_position(location, &position, method);
    log::debug!(
        "{} at {instant} with {}: {times:?}",
        location.name(),
        method.name()
    );
    times
}

/// Prayer times for a precomputed solar position.
pub fn times_for_position<M>(
    location: &Location,
    position: &SolarPosition,
    method: &M,
) -> PrayerTimes
where
    M: CalculationMethod + ?Sized,
{
    let latitude = location.latitude();
    let declination = position.declination;
    let solver = HourAngleSolver::new(latitude, declination);

    let noon = 12.0 - position.equation_of_time / 60.0;
    let before_noon = |offset: Option<f64>| offset.map(|h| clock_hours(noon - h));
    let after_noon = |offset: Option<f64>| offset.map(|h| clock_hours(noon + h));

    let horizon = solver.offset_hours(-(SOLAR_DISC_DEG + horizon_correction(location.elevation())));
    let sunset = after_noon(horizon);

    let times = PrayerTimes {
        fajr: before_noon(solver.offset_hours(-method.fajr_angle())),
        sunrise: before_noon(horizon),
        dhuhr: clock_hours(noon),
        asr: after_noon(solver.offset_hours(asr_altitude(
            method.asr_factor(),
            latitude,
            declination,
        ))),
        sunset,
        maghrib: sunset,
        isha: after_noon(solver.offset_hours(-method.isha_angle())),
    };

    let unreachable = times.unreachable();
    if !unreachable.is_empty() {
        log::debug!(
            "sun angle unreachable at latitude {latitude} (declination {declination:.3}): {unreachable:?}"
        );
    }
    times
}

/// Wrap an hour value into `[0, 24)`.
fn clock_hours(hours: f64) -> f64 {
    let wrapped = hours.rem_euclid(24.0);
    // rem_euclid may round a tiny negative input up to exactly 24.
    if wrapped >= 24.0 {
        0.0
    } else {
        wrapped
    }
}
