use chrono::{NaiveDate, TimeZone};

use crate::domain::estimate::rain_chance;
use crate::domain::weather::conversions::{mps_to_kmh, m_to_km, round_i32};
use crate::domain::weather::{Condition, DailySummary, Sample};

/// Rolls a flat 3-hourly sample series up into one summary per calendar
/// date. Dates are computed in `tz`, and output order follows the order in
/// which distinct dates first appear in the input.
///
/// The binary passes `chrono::Local`; tests pass `Utc` or a fixed offset.
pub fn aggregate<Tz: TimeZone>(samples: &[Sample], tz: &Tz) -> Vec<DailySummary> {
    let mut days: Vec<DayBucket> = Vec::new();

    for sample in samples {
        let Some(date) = tz
            .timestamp_opt(sample.timestamp, 0)
            .earliest()
            .map(|dt| dt.date_naive())
        else {
            continue;
        };

        match days.iter_mut().find(|bucket| bucket.date == date) {
            Some(bucket) => bucket.push(sample),
            None => days.push(DayBucket::new(date, sample)),
        }
    }

    days.into_iter().map(DayBucket::summarize).collect()
}

struct DayBucket {
    date: NaiveDate,
    max_temp: f64,
    min_temp: f64,
    condition: Condition,
    description: String,
    humidity_sum: f64,
    wind_sum: f64,
    visibility_sum: f64,
    rain_sum: f64,
    count: usize,
}

impl DayBucket {
    fn new(date: NaiveDate, first: &Sample) -> Self {
        Self {
            date,
            max_temp: first.temp_c,
            min_temp: first.temp_c,
            condition: first.condition,
            description: first.description.clone(),
            humidity_sum: first.humidity,
            wind_sum: first.wind_mps,
            visibility_sum: first.visibility_m,
            rain_sum: f64::from(rain_chance(first.condition)),
            count: 1,
        }
    }

    fn push(&mut self, sample: &Sample) {
        self.max_temp = self.max_temp.max(sample.temp_c);
        self.min_temp = self.min_temp.min(sample.temp_c);
        self.humidity_sum += sample.humidity;
        self.wind_sum += sample.wind_mps;
        self.visibility_sum += sample.visibility_m;
        self.rain_sum += f64::from(rain_chance(sample.condition));
        self.count += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn summarize(self) -> DailySummary {
        let count = self.count as f64;
        DailySummary {
            date: self.date,
            max_temp: self.max_temp.ceil() as i32,
            min_temp: round_i32(self.min_temp),
            condition: self.condition,
            description: self.description,
            avg_humidity: round_i32(self.humidity_sum / count).clamp(0, 100) as u8,
            avg_wind_kmh: round_i32(mps_to_kmh(self.wind_sum / count)),
            avg_visibility_km: round_i32(m_to_km(self.visibility_sum / count)),
            rain_chance: round_i32(self.rain_sum / count).clamp(0, 100) as u8,
        }
    }
}
