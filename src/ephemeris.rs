// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Low-precision solar ephemeris
//!
//! Apparent position of the Sun from the truncated series of the
//! *Astronomical Almanac* (accuracy ≈ 0.01° between 1950 and 2050), with the
//! equation of time built from the orbital eccentricity series of Meeus
//! (*Astronomical Algorithms*, eq. 25.4 and 28.3).
//!
//! All angular arguments are kept in **degrees** and converted with
//! `to_radians()` exactly at each trigonometric call.
//!
//! ## Quick Example
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use miqat::{JulianDay, SolarPosition};
//!
//! let jd = JulianDay::from_utc(Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap());
//! let sun = SolarPosition::at(jd);
//! assert!((sun.declination - 23.44).abs() < 0.05);
//! ```

use crate::julian::JulianDay;

/// Sun position for one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolarPosition {
    /// Declination in degrees.
    pub declination: f64,
    /// Equation of time (apparent − mean solar time) in minutes.
    pub equation_of_time: f64,
    /// Apparent right ascension in hours, in `(−12, 12]`.
    pub right_ascension: f64,
    /// Eccentricity of Earth's orbit.
    pub eccentricity: f64,
}

impl SolarPosition {
    /// Solar position at the given Julian Day.
    pub fn at(jd: JulianDay) -> Self {
        let d = jd.days_since_j2000().value();

        // Mean anomaly and mean longitude
        let g = 357.529 + 0.985_600_28 * d;
        let q = 280.459 + 0.985_647_36 * d;
        // Obliquity of the ecliptic
        let obliquity = 23.439 - 0.000_000_36 * d;

        let g_rad = g.to_radians();
        let center = 1.915 * g_rad.sin() + 0.020 * (2.0 * g_rad).sin();

        // Apparent longitude, corrected for nutation and aberration
        let omega = 125.04 - 1_934.136 * d;
        let lambda = (q + center) - 0.005_69 - 0.004_78 * omega.to_radians().sin();

        let (eps_rad, lambda_rad) = (obliquity.to_radians(), lambda.to_radians());

        let declination = (eps_rad.sin() * lambda_rad.sin()).asin().to_degrees();
        let right_ascension = (eps_rad.cos() * lambda_rad.sin())
            .atan2(lambda_rad.cos())
            .to_degrees()
            / 15.0;

        let e = orbital_eccentricity(jd);
        let y = (eps_rad / 2.0).tan().powi(2);
        let q_rad = q.to_radians();

        let eot_rad = y * (2.0 * q_rad).sin() - 2.0 * e * g_rad.sin()
            + 4.0 * e * y * g_rad.sin() * (2.0 * q_rad).cos()
            - 0.5 * y * y * (4.0 * q_rad).sin()
            - 1.25 * e * e * (2.0 * g_rad).sin();

        let position = Self {
            declination,
            equation_of_time: eot_rad.to_degrees() * 4.0,
            right_ascension,
            eccentricity: e,
        };
        log::trace!("solar position at {jd}: {position:?}");
        position
    }
}

/// Eccentricity of Earth's orbit (Meeus eq. 25.4).
pub fn orbital_eccentricity(jd: JulianDay) -> f64 {
    let t = jd.julian_centuries().value();
    0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t
}
