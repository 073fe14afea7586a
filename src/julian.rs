// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day numbers for UTC instants.
//!
//! [`JulianDay`] stores a single [`Days`] quantity counted from the start of
//! the Julian Period.  Instants are read from `chrono::DateTime<Utc>` with the
//! Gregorian-calendar algorithm of Meeus (*Astronomical Algorithms*, ch. 7);
//! the clock reading is taken as Universal Time and no ΔT is applied, which is
//! the convention of the low-precision solar formulas in
//! [`ephemeris`](crate::ephemeris).

use chrono::{DateTime, Datelike, Timelike, Utc};
use qtty::{Centuries, Days, Simplify};
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point on the Julian Day axis.
///
/// `Copy` and layout-identical to a single `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDay {
    quantity: Days,
}

impl JulianDay {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw day count.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// Julian Day of a Gregorian calendar date and time of day.
    ///
    /// January and February are counted as months 13 and 14 of the previous
    /// year, then the Gregorian century correction `B = 2 − A + ⌊A/4⌋` is
    /// applied.  `second` may carry a fractional part.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        let (mut y, mut m) = (f64::from(year), f64::from(month));
        if month <= 2 {
            y -= 1.0;
            m += 12.0;
        }

        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        let day_fraction =
            (f64::from(hour) + f64::from(minute) / 60.0 + second / 3_600.0) / 24.0;

        Self::new(
            (365.25 * (y + 4_716.0)).floor() + (30.6001 * (m + 1.0)).floor() + f64::from(day) + b
                - 1_524.5
                + day_fraction,
        )
    }

    /// Julian Day of a UTC instant.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let second =
            f64::from(datetime.second()) + f64::from(datetime.nanosecond()) / 1e9;
        Self::from_calendar(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            datetime.hour(),
            datetime.minute(),
            second,
        )
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Days elapsed since J2000.0 (the `d` argument of the solar series).
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }

    /// Julian centuries since J2000.0.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            (self.days_since_j2000() / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }
}

impl std::fmt::Display for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Julian Day: {}", self.quantity)
    }
}

impl From<DateTime<Utc>> for JulianDay {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_utc(datetime)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl Sub<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl Sub for JulianDay {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDay {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn j2000_from_utc() {
        let datetime = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd = JulianDay::from_utc(datetime);
        assert!((jd.value() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn january_and_february_use_previous_year() {
        // Meeus example 7.a: 1957 October 4.81 → JD 2436116.31
        let jd = JulianDay::from_calendar(1957, 10, 4, 19, 26, 24.0);
        assert!((jd.value() - 2_436_116.31).abs() < 1e-6);

        // 1988 January 27.0 → JD 2447187.5
        let jan = JulianDay::from_calendar(1988, 1, 27, 0, 0, 0.0);
        assert!((jan.value() - 2_447_187.5).abs() < 1e-9);

        // 2024 February 29.0 → JD 2460369.5
        let leap = JulianDay::from_calendar(2024, 2, 29, 0, 0, 0.0);
        assert!((leap.value() - 2_460_369.5).abs() < 1e-9);
    }

    #[test]
    fn equinox_2024_noon() {
        let datetime = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        assert!((JulianDay::from_utc(datetime).value() - 2_460_390.0).abs() < 1e-9);
    }

    #[test]
    fn sub_second_precision_is_kept() {
        let whole = Utc.with_ymd_and_hms(2010, 6, 1, 6, 30, 15).unwrap();
        let half = whole + chrono::Duration::milliseconds(500);
        let delta = JulianDay::from_utc(half) - JulianDay::from_utc(whole);
        assert!((delta.value() - 0.5 / 86_400.0).abs() < 1e-8);
    }

    #[test]
    fn consecutive_days_are_one_apart() {
        let a = Utc.with_ymd_and_hms(2023, 2, 28, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap();
        let span = JulianDay::from_utc(b) - JulianDay::from_utc(a);
        assert!((span - Days::new(1.0)).abs() < Days::new(1e-12));
    }

    #[test]
    fn centuries_since_j2000() {
        let jd = JulianDay::J2000 + Days::new(36_525.0 * 2.0);
        assert!((jd.julian_centuries() - Centuries::new(2.0)).abs() < Centuries::new(1e-12));
        assert_eq!(jd.days_since_j2000(), Days::new(73_050.0));
    }

    #[test]
    fn display_has_label() {
        let s = format!("{}", JulianDay::J2000);
        assert!(s.contains("Julian Day"));
    }
}
