use std::fmt::Display;

use chrono::{Days, NaiveDate, TimeZone};
use rand::Rng;

use crate::domain::estimate::{air_quality, uv_index};
use crate::domain::weather::conversions::{capitalize_first, m_to_km, mps_to_kmh, round_i32};
use crate::domain::weather::{CurrentReading, LocationOrigin};

/// Usable forecast horizon handed to the renderer. The aggregator itself
/// places no cap; callers truncate to this many entries.
pub const FORECAST_DAYS: usize = 5;

/// Labels for the daily cards: "Today", "Tomorrow", then short weekday
/// names, counted from `today`.
#[must_use]
pub fn day_labels(today: NaiveDate, count: usize) -> Vec<String> {
    (0..count)
        .map(|offset| match offset {
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            _ => (today + Days::new(offset as u64)).format("%a").to_string(),
        })
        .collect()
}

/// Everything the rendering boundary needs for the current-conditions
/// block, in display units.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentDisplay {
    pub temperature_c: i32,
    pub condition_text: String,
    pub location_label: String,
    pub uv_index: u8,
    pub wind_kmh: f64,
    pub sunrise: String,
    pub sunset: String,
    pub humidity: u8,
    pub visibility_km: f64,
    pub air_quality: u16,
    pub pressure_hpa: u32,
}

impl CurrentDisplay {
    pub fn build<Tz: TimeZone>(
        reading: &CurrentReading,
        origin: LocationOrigin,
        tz: &Tz,
        rng: &mut impl Rng,
    ) -> Self
    where
        Tz::Offset: Display,
    {
        let location_label = match origin {
            LocationOrigin::Geolocated => format!("{} (Current Location)", reading.name),
            LocationOrigin::Named => reading.name.clone(),
        };

        Self {
            temperature_c: round_i32(reading.temp_c),
            condition_text: capitalize_first(&reading.description),
            location_label,
            uv_index: uv_index(reading.condition, rng),
            wind_kmh: mps_to_kmh(reading.wind_mps),
            sunrise: format_clock(reading.sunrise, tz),
            sunset: format_clock(reading.sunset, tz),
            humidity: round_i32(reading.humidity).clamp(0, 100) as u8,
            visibility_km: m_to_km(reading.visibility_m),
            air_quality: air_quality(reading.temp_c, rng),
            pressure_hpa: round_i32(reading.pressure_hpa).max(0) as u32,
        }
    }
}

fn format_clock<Tz: TimeZone>(epoch: i64, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    tz.timestamp_opt(epoch, 0)
        .earliest()
        .map_or_else(|| "--:--".to_string(), |dt| dt.format("%-I:%M %p").to_string())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::weather::Condition;

    fn reading() -> CurrentReading {
        CurrentReading {
            name: "New Delhi".to_string(),
            temp_c: 28.6,
            condition: Condition::Clear,
            description: "clear sky".to_string(),
            humidity: 40.0,
            pressure_hpa: 1011.0,
            wind_mps: 4.2,
            visibility_m: 6_500.0,
            sunrise: 1_767_238_200, // 2026-01-01 03:30 UTC
            sunset: 1_767_277_800,  // 2026-01-01 14:30 UTC
        }
    }

    #[test]
    fn day_labels_start_with_today_and_tomorrow() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date");
        let labels = day_labels(today, FORECAST_DAYS);
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0], "Today");
        assert_eq!(labels[1], "Tomorrow");
        // 2026-01-01 is a Thursday, so days 3-5 are Sat, Sun, Mon.
        assert_eq!(labels[2], "Sat");
        assert_eq!(labels[3], "Sun");
        assert_eq!(labels[4], "Mon");
    }

    #[test]
    fn geolocated_origin_gets_current_location_suffix() {
        let mut rng = StdRng::seed_from_u64(3);
        let display =
            CurrentDisplay::build(&reading(), LocationOrigin::Geolocated, &Utc, &mut rng);
        assert_eq!(display.location_label, "New Delhi (Current Location)");

        let display = CurrentDisplay::build(&reading(), LocationOrigin::Named, &Utc, &mut rng);
        assert_eq!(display.location_label, "New Delhi");
    }

    #[test]
    fn display_units_are_converted() {
        let mut rng = StdRng::seed_from_u64(3);
        let display = CurrentDisplay::build(&reading(), LocationOrigin::Named, &Utc, &mut rng);

        assert_eq!(display.temperature_c, 29);
        assert_eq!(display.condition_text, "Clear sky");
        assert!((display.wind_kmh - 15.12).abs() < 1e-9);
        assert!((display.visibility_km - 6.5).abs() < 1e-9);
        assert_eq!(display.humidity, 40);
        assert_eq!(display.pressure_hpa, 1011);
        assert!((7..=9).contains(&display.uv_index));
        assert!((50..=200).contains(&display.air_quality));
    }

    #[test]
    fn sun_times_render_twelve_hour_clock() {
        let mut rng = StdRng::seed_from_u64(3);
        let display = CurrentDisplay::build(&reading(), LocationOrigin::Named, &Utc, &mut rng);
        assert_eq!(display.sunrise, "3:30 AM");
        assert_eq!(display.sunset, "2:30 PM");
    }
}
