use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use miqat::{
    clock_reading, compute_prayer_times, format_hours, ClockFormat, Hanafi, HijriConverter,
    HijriDate, Location, MoonProvider, Notice, PrayerCalculator, PrayerTimesCache, ProviderError,
    Standard, WeatherProvider, WeatherReport, INVALID_TIME,
};
use std::time::Duration;

fn sample_locations() -> Vec<Location> {
    [
        ("Amsterdam", 52.3676, 4.9041, 2.0),
        ("Mecca", 21.4225, 39.8262, 277.0),
        ("Lahore", 31.5497, 74.3436, 217.0),
        ("Johannesburg", -26.2041, 28.0473, 1753.0),
        ("Beijing", 39.9042, 116.4074, 43.0),
        ("Moscow", 55.7558, 37.6173, 156.0),
        ("Paramaribo", 5.8520, -55.2038, 1.0),
    ]
    .into_iter()
    .map(|(name, lat, lon, elev)| {
        Location::new(lat, lon)
            .unwrap()
            .with_elevation(elev)
            .unwrap()
            .with_name(name)
    })
    .collect()
}

/// Noon UTC of every fifth day of 2024.
fn year_of_instants() -> impl Iterator<Item = DateTime<Utc>> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    (0..366).step_by(5).map(move |d| start + TimeDelta::days(d))
}

#[test]
fn dhuhr_is_always_within_the_day() {
    for location in sample_locations() {
        for instant in year_of_instants() {
            let times = compute_prayer_times(&location, instant, &Standard);
            assert!(
                times.dhuhr.is_finite() && (0.0..24.0).contains(&times.dhuhr),
                "{location} {instant}: dhuhr = {}",
                times.dhuhr
            );
        }
    }
}

#[test]
fn sunrise_dhuhr_sunset_are_ordered() {
    for location in sample_locations() {
        for instant in year_of_instants() {
            let times = compute_prayer_times(&location, instant, &Standard);
            let (Some(sunrise), Some(sunset)) = (times.sunrise, times.sunset) else {
                continue;
            };
            assert!(
                sunrise <= times.dhuhr && times.dhuhr <= sunset,
                "{location} {instant}: {times:?}"
            );
            assert_eq!(times.maghrib, times.sunset);
        }
    }
}

#[test]
fn hanafi_asr_is_never_earlier() {
    let mut compared = 0;
    for latitude in [-60.0, -35.0, -10.0, 0.0, 15.0, 40.0, 60.0] {
        let location = Location::new(latitude, 0.0).unwrap();
        for instant in year_of_instants() {
            let standard = compute_prayer_times(&location, instant, &Standard);
            let hanafi = compute_prayer_times(&location, instant, &Hanafi);
            if let (Some(s), Some(h)) = (standard.asr, hanafi.asr) {
                assert!(h >= s, "latitude {latitude} {instant}: hanafi {h} < standard {s}");
                compared += 1;
            }
        }
    }
    assert!(compared > 400);
}

#[test]
fn polar_summer_has_no_twilight_or_horizon_crossing() {
    let svalbard = Location::new(78.0, 15.0).unwrap().with_name("Svalbard");
    let solstice = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
    let times = compute_prayer_times(&svalbard, solstice, &Standard);

    assert_eq!(times.fajr, None);
    assert_eq!(times.sunrise, None);
    assert_eq!(times.sunset, None);
    assert_eq!(times.maghrib, None);
    assert_eq!(times.isha, None);
    assert!((0.0..24.0).contains(&times.dhuhr));
    assert_eq!(format_hours(times.fajr, ClockFormat::TwelveHour), INVALID_TIME);
}

#[test]
fn amsterdam_equinox_dhuhr_matches_independent_reference() {
    let amsterdam = &sample_locations()[0];
    let instant = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    let times = compute_prayer_times(amsterdam, instant, &Standard);

    // Spencer-style approximation of the equation of time, day of year 80.
    let b = (360.0_f64 * (80.0 - 81.0) / 364.0).to_radians();
    let eot_minutes = 9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin();
    let reference = 12.0 - eot_minutes / 60.0;

    assert!(
        (times.dhuhr - reference).abs() < 1.0 / 60.0,
        "dhuhr {} vs reference {reference}",
        times.dhuhr
    );
}

#[test]
fn elevation_widens_the_day() {
    let instant = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    let sea_level = Location::new(-26.2041, 28.0473).unwrap();
    let highveld = sea_level.clone().with_elevation(1753.0).unwrap();

    let low = compute_prayer_times(&sea_level, instant, &Standard);
    let high = compute_prayer_times(&highveld, instant, &Standard);

    assert!(high.sunrise.unwrap() < low.sunrise.unwrap());
    assert!(high.sunset.unwrap() > low.sunset.unwrap());
    assert_eq!(high.dhuhr, low.dhuhr);
    assert_eq!(high.fajr, low.fajr);
}

#[test]
fn formatted_times_parse_back_to_the_rounded_reading() {
    let samples = [0.0, 0.999, 5.5, 11.9917, 12.0083, 17.25, 23.99, 23.0 + 59.7 / 60.0];
    for hours in samples {
        let text = format_hours(Some(hours), ClockFormat::TwentyFourHour);
        let (h, m) = text.split_once(':').unwrap();
        let parsed = (h.parse::<u32>().unwrap(), m.parse::<u32>().unwrap());
        assert_eq!(parsed, clock_reading(hours), "{hours} -> {text}");
        assert!(parsed.0 < 24 && parsed.1 < 60);
    }
    assert_eq!(format_hours(Some(23.0 + 59.7 / 60.0), ClockFormat::TwentyFourHour), "00:00");
}

#[test]
fn cache_serves_the_engine_result() {
    let cache = PrayerTimesCache::new();
    let instant = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
    for location in sample_locations() {
        let cached = cache.get_or_compute(&location, instant, &Hanafi);
        assert_eq!(cached, compute_prayer_times(&location, instant, &Hanafi));
    }
    assert_eq!(cache.len(), 7);
}

// ── Report with collaborators ─────────────────────────────────────────────

struct FrozenWeather;

impl WeatherProvider for FrozenWeather {
    fn fetch(&self, _location: &Location) -> Result<WeatherReport, ProviderError> {
        Ok(WeatherReport {
            temperature_c: -8.0,
            description: "overcast clouds".into(),
        })
    }
}

struct TimedOutWeather;

impl WeatherProvider for TimedOutWeather {
    fn fetch(&self, _location: &Location) -> Result<WeatherReport, ProviderError> {
        Err(ProviderError::Timeout(Duration::from_secs(10)))
    }
}

struct TableMoon;

impl MoonProvider for TableMoon {
    fn phase(&self, _instant: DateTime<Utc>) -> Result<f64, ProviderError> {
        Ok(3.7)
    }

    fn moonrise(
        &self,
        _location: &Location,
        _instant: DateTime<Utc>,
    ) -> Result<Option<NaiveTime>, ProviderError> {
        Ok(NaiveTime::from_hms_opt(8, 5, 0))
    }

    fn moonset(
        &self,
        _location: &Location,
        _instant: DateTime<Utc>,
    ) -> Result<Option<NaiveTime>, ProviderError> {
        Ok(None)
    }
}

struct FixedHijri;

impl HijriConverter for FixedHijri {
    fn to_hijri(&self, _date: NaiveDate) -> Result<HijriDate, ProviderError> {
        Ok(HijriDate {
            day: 4,
            month_name: "Rajab".into(),
            year: 1445,
        })
    }
}

#[test]
fn report_merges_collaborators() {
    let moscow = sample_locations().remove(5);
    let calc = PrayerCalculator::new(moscow, "standard")
        .unwrap()
        .with_weather(FrozenWeather)
        .with_moon(TableMoon)
        .with_hijri(FixedHijri);
    let report = calc.daily_report_for_date(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());

    assert_eq!(report.notices, [Notice::ColdMoonrise]);
    let moon = report.moon.unwrap().unwrap();
    assert_eq!(moon.moonset, None);
    assert_eq!(report.hijri.unwrap().unwrap().to_string(), "4 Rajab 1445 AH");
}

#[test]
fn report_survives_a_weather_timeout() {
    let moscow = sample_locations().remove(5);
    let calc = PrayerCalculator::new(moscow, "hanafi")
        .unwrap()
        .with_weather(TimedOutWeather)
        .with_moon(TableMoon);
    let instant = Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).unwrap();
    let report = calc.daily_report(instant);

    assert!(matches!(report.weather, Some(Err(ProviderError::Timeout(_)))));
    assert!(report.moon.unwrap().is_ok());
    assert!(report.notices.is_empty());
    assert_eq!(report.times, calc.times(instant));
    assert!(report.formatted.iter().all(|(_, text)| !text.is_empty()));
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[test]
fn location_deserialisation_is_validated() {
    let ok: Location =
        serde_json::from_str(r#"{ "latitude": 21.4225, "longitude": 39.8262, "elevation": 277 }"#)
            .unwrap();
    assert_eq!(ok.elevation(), 277.0);
    assert_eq!(ok.timezone(), "UTC");

    let bad = serde_json::from_str::<Location>(r#"{ "latitude": 120.0, "longitude": 0.0 }"#);
    assert!(bad.is_err());
}

#[cfg(feature = "serde")]
#[test]
fn prayer_times_serialise_invalid_as_null() {
    let svalbard = Location::new(78.0, 15.0).unwrap();
    let solstice = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
    let times = compute_prayer_times(&svalbard, solstice, &Standard);

    let json = serde_json::to_value(times).unwrap();
    assert!(json["fajr"].is_null());
    assert!(json["dhuhr"].is_f64());
    let back: miqat::PrayerTimes = serde_json::from_value(json).unwrap();
    assert_eq!(back.fajr, None);
    assert!((back.dhuhr - times.dhuhr).abs() < 1e-12);
}
