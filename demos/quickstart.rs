use chrono::{TimeZone, Utc};
use miqat::{ClockFormat, Location, MethodKind, PrayerCalculator};

fn main() -> miqat::Result<()> {
    let locations = [
        ("Amsterdam", 52.3676, 4.9041, 2.0, "Europe/Amsterdam"),
        ("Mecca", 21.4225, 39.8262, 277.0, "Asia/Riyadh"),
        ("Lahore", 31.5497, 74.3436, 217.0, "Asia/Karachi"),
        ("Johannesburg", -26.2041, 28.0473, 1753.0, "Africa/Johannesburg"),
        ("Beijing", 39.9042, 116.4074, 43.0, "Asia/Shanghai"),
        ("Moscow", 55.7558, 37.6173, 156.0, "Europe/Moscow"),
        ("Paramaribo", 5.8520, -55.2038, 1.0, "America/Paramaribo"),
    ];

    let date = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
    println!("Prayer times for {} (UTC)", date.format("%Y-%m-%d"));

    for (name, lat, lon, elevation, timezone) in locations {
        let location = Location::new(lat, lon)?
            .with_elevation(elevation)?
            .with_timezone(timezone)
            .with_name(name);
        println!("\n{location}");

        for kind in MethodKind::ALL {
            let calculator = PrayerCalculator::new(location.clone(), kind.key())?
                .with_clock_format(ClockFormat::TwentyFourHour);
            let report = calculator.daily_report(date);

            println!("  {}", report.method_name);
            for (prayer, time) in &report.formatted {
                println!("    {:<8} {time}", prayer.to_string());
            }
        }
    }
    Ok(())
}
