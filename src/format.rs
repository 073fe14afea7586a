// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Clock-string rendering of fractional hours.

use crate::error::FormatError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rendering of a time whose sun angle is unreachable.
pub const INVALID_TIME: &str = "Invalid";

/// Clock convention.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockFormat {
    /// `HH:MM`, 00–23.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "24h"))]
    TwentyFourHour,
    /// `HH:MM AM|PM`, 01–12.
    #[cfg_attr(feature = "serde", serde(rename = "12h"))]
    TwelveHour,
}

impl fmt::Display for ClockFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClockFormat::TwentyFourHour => "24h",
            ClockFormat::TwelveHour => "12h",
        })
    }
}

impl FromStr for ClockFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "24h" | "24" => Ok(ClockFormat::TwentyFourHour),
            "12h" | "12" => Ok(ClockFormat::TwelveHour),
            _ => Err(FormatError::UnknownClockFormat(s.to_owned())),
        }
    }
}

/// Hour and minute of a fractional hour value, rounded to the nearest
/// minute.  A minute rounding up to 60 carries into the next hour, wrapping
/// 23:59.5 to 00:00.
pub fn clock_reading(hours: f64) -> (u32, u32) {
    let mut wrapped = hours.rem_euclid(24.0);
    if wrapped >= 24.0 {
        wrapped = 0.0;
    }
    let whole = wrapped.floor();
    let mut hour = whole as u32;
    let mut minute = ((wrapped - whole) * 60.0).round() as u32;
    if minute == 60 {
        hour = (hour + 1) % 24;
        minute = 0;
    }
    (hour, minute)
}

/// Render `hours` as a clock string; `None` and non-finite values render as
/// [`INVALID_TIME`].
pub fn format_hours(hours: Option<f64>, format: ClockFormat) -> String {
    let Some(hours) = hours.filter(|h| h.is_finite()) else {
        return INVALID_TIME.to_owned();
    };

    let (hour, minute) = clock_reading(hours);
    match format {
        ClockFormat::TwentyFourHour => format!("{hour:02}:{minute:02}"),
        ClockFormat::TwelveHour => {
            let period = if hour < 12 { "AM" } else { "PM" };
            let display = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{display:02}:{minute:02} {period}")
        }
    }
}
