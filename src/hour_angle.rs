// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hour-angle inversion.
//!
//! For an observer at latitude φ and a Sun at declination δ, the hour angle ω
//! at which the Sun stands at altitude `h` satisfies
//!
//! ```text
//! cos ω = (sin h − sin φ · sin δ) / (cos φ · cos δ)
//! ```
//!
//! When the right-hand side leaves `[−1, 1]` the Sun never reaches `h` on that
//! day (polar day or night) and the solver returns `None`.

/// Degrees of hour angle per hour of time.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Hour-angle solver for a fixed latitude and declination.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HourAngleSolver {
    sin_lat_sin_decl: f64,
    cos_lat_cos_decl: f64,
}

impl HourAngleSolver {
    /// Both angles in degrees.
    pub fn new(latitude: f64, declination: f64) -> Self {
        let (lat, decl) = (latitude.to_radians(), declination.to_radians());
        Self {
            sin_lat_sin_decl: lat.sin() * decl.sin(),
            cos_lat_cos_decl: lat.cos() * decl.cos(),
        }
    }

    /// Hour angle ω ∈ [0°, 180°] at which the Sun has `target_altitude`
    /// degrees of elevation (negative below the horizon).
    pub fn solve(&self, target_altitude: f64) -> Option<f64> {
        let cosine =
            (target_altitude.to_radians().sin() - self.sin_lat_sin_decl) / self.cos_lat_cos_decl;
        // NaN fails the range check as well.
        if (-1.0..=1.0).contains(&cosine) {
            Some(cosine.acos().to_degrees())
        } else {
            None
        }
    }

    /// [`solve`](Self::solve) expressed as an offset from solar noon in hours.
    #[inline]
    pub fn offset_hours(&self, target_altitude: f64) -> Option<f64> {
        self.solve(target_altitude).map(|omega| omega / DEGREES_PER_HOUR)
    }
}
