use chrono::NaiveDate;
use serde::Deserialize;

pub mod conversions;

/// Condition category reported by the weather API. Strings outside the
/// known set collapse into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Other,
}

impl Condition {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Drizzle" => Self::Drizzle,
            "Thunderstorm" => Self::Thunderstorm,
            "Snow" => Self::Snow,
            "Mist" => Self::Mist,
            "Fog" => Self::Fog,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Drizzle => "Drizzle",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::Mist => "Mist",
            Self::Fog => "Fog",
            Self::Other => "Other",
        }
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

/// One 3-hourly forecast point, metric units.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub timestamp: i64,
    pub temp_c: f64,
    pub condition: Condition,
    pub description: String,
    pub humidity: f64,
    pub wind_mps: f64,
    pub visibility_m: f64,
}

/// Parsed current-conditions payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentReading {
    pub name: String,
    pub temp_c: f64,
    pub condition: Condition,
    pub description: String,
    pub humidity: f64,
    pub pressure_hpa: f64,
    pub wind_mps: f64,
    pub visibility_m: f64,
    pub sunrise: i64,
    pub sunset: i64,
}

/// One calendar day's rollup of forecast samples.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub max_temp: i32,
    pub min_temp: i32,
    pub condition: Condition,
    pub description: String,
    pub avg_humidity: u8,
    pub avg_wind_kmh: i32,
    pub avg_visibility_km: i32,
    pub rain_chance: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Coords { lat: f64, lon: f64 },
    Place(String),
}

impl LocationQuery {
    pub fn place(name: impl Into<String>) -> Self {
        Self::Place(name.into())
    }

    #[must_use]
    pub fn coords(lat: f64, lon: f64) -> Self {
        Self::Coords { lat, lon }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationOrigin {
    Geolocated,
    Named,
}

/// A location query tagged with how it was obtained. The tag travels with
/// the query so the display layer can label geolocated results without
/// consulting shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub query: LocationQuery,
    pub origin: LocationOrigin,
}

impl ResolvedLocation {
    #[must_use]
    pub fn named(query: LocationQuery) -> Self {
        Self {
            query,
            origin: LocationOrigin::Named,
        }
    }

    #[must_use]
    pub fn geolocated(lat: f64, lon: f64) -> Self {
        Self {
            query: LocationQuery::coords(lat, lon),
            origin: LocationOrigin::Geolocated,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub current: CurrentReading,
    pub samples: Vec<Sample>,
}
