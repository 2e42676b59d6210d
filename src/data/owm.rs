use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::domain::weather::{
    Condition, CurrentReading, LocationQuery, Sample, WeatherReport,
};
use crate::error::WeatherError;

const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Visibility the API omits is treated as full visibility.
const DEFAULT_VISIBILITY_M: f64 = 10_000.0;

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    current_url: String,
    forecast_url: String,
}

impl WeatherClient {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_urls(api_key, CURRENT_URL, FORECAST_URL)
    }

    pub fn with_base_urls(
        api_key: impl Into<String>,
        current_url: impl Into<String>,
        forecast_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            api_key: api_key.into(),
            current_url: current_url.into(),
            forecast_url: forecast_url.into(),
        }
    }

    /// Fetches current conditions and the 3-hourly forecast series for a
    /// location. The two requests are issued sequentially; neither is
    /// retried or cached here.
    pub async fn fetch_report(&self, query: &LocationQuery) -> Result<WeatherReport, WeatherError> {
        let current = self.fetch_current(query).await?;
        let samples = self.fetch_forecast(query).await?;
        debug!(place = %current.name, samples = samples.len(), "weather report fetched");
        Ok(WeatherReport { current, samples })
    }

    pub async fn fetch_current(
        &self,
        query: &LocationQuery,
    ) -> Result<CurrentReading, WeatherError> {
        let response = self
            .client
            .get(&self.current_url)
            .query(&self.request_params(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::DataUnavailable(status));
        }

        let payload: CurrentResponse = response.json().await?;
        Ok(payload.into_reading())
    }

    pub async fn fetch_forecast(&self, query: &LocationQuery) -> Result<Vec<Sample>, WeatherError> {
        let response = self
            .client
            .get(&self.forecast_url)
            .query(&self.request_params(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::DataUnavailable(status));
        }

        let payload: ForecastResponse = response.json().await?;
        Ok(payload.list.into_iter().map(ForecastItem::into_sample).collect())
    }

    fn request_params(&self, query: &LocationQuery) -> Vec<(String, String)> {
        let mut params = match query {
            LocationQuery::Coords { lat, lon } => vec![
                ("lat".to_string(), lat.to_string()),
                ("lon".to_string(), lon.to_string()),
            ],
            LocationQuery::Place(name) => vec![("q".to_string(), name.clone())],
        };
        params.push(("appid".to_string(), self.api_key.clone()));
        params.push(("units".to_string(), "metric".to_string()));
        params
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    #[serde(default)]
    wind: Option<WindBlock>,
    visibility: Option<f64>,
    sys: SysBlock,
}

impl CurrentResponse {
    fn into_reading(self) -> CurrentReading {
        let (condition, description) = primary_condition(&self.weather);
        CurrentReading {
            name: self.name,
            temp_c: self.main.temp,
            condition,
            description,
            humidity: self.main.humidity,
            pressure_hpa: self.main.pressure,
            wind_mps: self.wind.map_or(0.0, |w| w.speed),
            visibility_m: self.visibility.unwrap_or(DEFAULT_VISIBILITY_M),
            sunrise: self.sys.sunrise,
            sunset: self.sys.sunset,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt: i64,
    main: ForecastMain,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    #[serde(default)]
    wind: Option<WindBlock>,
    visibility: Option<f64>,
}

impl ForecastItem {
    fn into_sample(self) -> Sample {
        let (condition, description) = primary_condition(&self.weather);
        Sample {
            timestamp: self.dt,
            temp_c: self.main.temp,
            condition,
            description,
            humidity: self.main.humidity,
            wind_mps: self.wind.map_or(0.0, |w| w.speed),
            visibility_m: self.visibility.unwrap_or(DEFAULT_VISIBILITY_M),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    main: Condition,
    description: String,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct SysBlock {
    sunrise: i64,
    sunset: i64,
}

fn primary_condition(blocks: &[ConditionBlock]) -> (Condition, String) {
    blocks.first().map_or_else(
        || (Condition::Other, String::new()),
        |block| (block.main, block.description.clone()),
    )
}
