// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Daily prayer report.
//!
//! A [`PrayerCalculator`] binds a location to a calculation method and a clock
//! format, optionally together with weather, lunar and Hijri collaborators.
//! [`PrayerCalculator::daily_report`] merges the engine output with whatever
//! the collaborators deliver.  A failing collaborator is logged and recorded
//! in the report; it never prevents the prayer times from being produced.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::config::CalculatorConfig;
use crate::engine::{compute_prayer_times, Prayer, PrayerTimes};
use crate::error::{MethodError, ProviderError};
use crate::format::ClockFormat;
use crate::location::Location;
use crate::method::{CalculationMethod, MethodKind};
use crate::providers::{HijriConverter, HijriDate, MoonProvider, WeatherProvider, WeatherReport};

/// Temperature, in °C, below which a rising Moon triggers
/// [`Notice::ColdMoonrise`].
pub const COLD_THRESHOLD_C: f64 = 5.0;

/// Lunar data of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct MoonReport {
    /// Moon age in days, as reported by the [`MoonProvider`].
    pub phase: f64,
    pub moonrise: Option<NaiveTime>,
    pub moonset: Option<NaiveTime>,
}

/// Advisory attached to a report.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Notice {
    /// Temperature below [`COLD_THRESHOLD_C`] and the Moon rises that day.
    ColdMoonrise,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ColdMoonrise => f.write_str("Low temperature and the moon is rising."),
        }
    }
}

/// Everything known about one prayer day.
///
/// Collaborator fields are `None` when no provider is attached and
/// `Some(Err(_))` when the provider failed.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    pub gregorian_date: NaiveDate,
    pub method_name: String,
    pub times: PrayerTimes,
    /// The seven times rendered in the calculator's clock format.
    pub formatted: Vec<(Prayer, String)>,
    pub weather: Option<Result<WeatherReport, ProviderError>>,
    pub moon: Option<Result<MoonReport, ProviderError>>,
    pub hijri: Option<Result<HijriDate, ProviderError>>,
    pub notices: Vec<Notice>,
}

impl DailyReport {
    /// Formatted time of one prayer.
    pub fn formatted_time(&self, prayer: Prayer) -> Option<&str> {
        self.formatted
            .iter()
            .find(|(p, _)| *p == prayer)
            .map(|(_, text)| text.as_str())
    }
}

/// Prayer time calculator for one location.
pub struct PrayerCalculator {
    location: Location,
    method: Arc<dyn CalculationMethod>,
    clock_format: ClockFormat,
    weather: Option<Box<dyn WeatherProvider>>,
    moon: Option<Box<dyn MoonProvider>>,
    hijri: Option<Box<dyn HijriConverter>>,
}

impl fmt::Debug for PrayerCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrayerCalculator")
            .field("location", &self.location)
            .field("method", &self.method.name())
            .field("clock_format", &self.clock_format)
            .field("weather", &self.weather.is_some())
            .field("moon", &self.moon.is_some())
            .field("hijri", &self.hijri.is_some())
            .finish()
    }
}

impl PrayerCalculator {
    /// Calculator using the built-in method registered under `method`
    /// (case-insensitive).
    pub fn new(location: Location, method: &str) -> Result<Self, MethodError> {
        let kind: MethodKind = method.parse()?;
        Ok(Self::with_method(location, kind.shared()))
    }

    pub fn with_method(location: Location, method: Arc<dyn CalculationMethod>) -> Self {
        Self {
            location,
            method,
            clock_format: ClockFormat::default(),
            weather: None,
            moon: None,
            hijri: None,
        }
    }

    pub fn from_config(location: Location, config: &CalculatorConfig) -> Result<Self, MethodError> {
        let method = config.method.resolve()?;
        Ok(Self::with_method(location, method).with_clock_format(config.clock_format))
    }

    pub fn with_clock_format(mut self, clock_format: ClockFormat) -> Self {
        self.clock_format = clock_format;
        self
    }

    pub fn with_weather(mut self, provider: impl WeatherProvider + 'static) -> Self {
        self.weather = Some(Box::new(provider));
        self
    }

    pub fn with_moon(mut self, provider: impl MoonProvider + 'static) -> Self {
        self.moon = Some(Box::new(provider));
        self
    }

    pub fn with_hijri(mut self, converter: impl HijriConverter + 'static) -> Self {
        self.hijri = Some(Box::new(converter));
        self
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn method(&self) -> &dyn CalculationMethod {
        self.method.as_ref()
    }

    pub fn clock_format(&self) -> ClockFormat {
        self.clock_format
    }

    /// Raw prayer times for the day containing `instant`.
    pub fn times(&self, instant: DateTime<Utc>) -> PrayerTimes {
        compute_prayer_times(&self.location, instant, self.method.as_ref())
    }

    /// Report for the day containing `instant`.
    pub fn daily_report(&self, instant: DateTime<Utc>) -> DailyReport {
        let times = self.times(instant);
        let gregorian_date = instant.date_naive();

        let name = self.location.name();
        let weather = self.weather.as_ref().map(|provider| {
            provider
                .fetch(&self.location)
                .inspect_err(|err| log::warn!("no weather data for {name}: {err}"))
        });

        let moon = self.moon.as_ref().map(|provider| {
            moon_report(provider.as_ref(), &self.location, instant)
                .inspect_err(|err| log::warn!("no moon data for {name}: {err}"))
        });

        let hijri = self.hijri.as_ref().map(|converter| {
            converter
                .to_hijri(gregorian_date)
                .inspect_err(|err| log::warn!("no Hijri date for {gregorian_date}: {err}"))
        });

        let notices = collect_notices(weather.as_ref(), moon.as_ref());

        DailyReport {
            gregorian_date,
            method_name: self.method.name().to_owned(),
            formatted: times.formatted(self.clock_format),
            times,
            weather,
            moon,
            hijri,
            notices,
        }
    }

    /// Report for `date`, evaluated at midnight UTC.
    pub fn daily_report_for_date(&self, date: NaiveDate) -> DailyReport {
        self.daily_report(date.and_time(NaiveTime::MIN).and_utc())
    }
}

fn moon_report(
    provider: &dyn MoonProvider,
    location: &Location,
    instant: DateTime<Utc>,
) -> Result<MoonReport, ProviderError> {
    Ok(MoonReport {
        phase: provider.phase(instant)?,
        moonrise: provider.moonrise(location, instant)?,
        moonset: provider.moonset(location, instant)?,
    })
}

fn collect_notices(
    weather: Option<&Result<WeatherReport, ProviderError>>,
    moon: Option<&Result<MoonReport, ProviderError>>,
) -> Vec<Notice> {
    let cold = matches!(weather, Some(Ok(w)) if w.temperature_c < COLD_THRESHOLD_C);
    let moon_rises = matches!(moon, Some(Ok(m)) if m.moonrise.is_some());
    if cold && moon_rises {
        vec![Notice::ColdMoonrise]
    } else {
        Vec::new()
    }
}
