use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// Geolocation was denied, timed out, or returned no usable fix.
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),

    /// The weather API answered with a non-success status.
    #[error("weather data not found (status {0})")]
    DataUnavailable(reqwest::StatusCode),

    /// Transport-level failure talking to the weather API.
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
}
