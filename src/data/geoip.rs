use std::sync::Mutex;
use std::time::{Duration, Instant};

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::WeatherError;

const GEOIP_URL: &str = "https://ipapi.co/json/";

/// Geolocation requests are bounded by this timeout.
const LOCATE_TIMEOUT: Duration = Duration::from_secs(10);

/// A fix this recent is reused instead of asking again.
const FIX_MAX_AGE: Duration = Duration::from_secs(300);

/// Seam for device geolocation so the resolver can be exercised with
/// stub providers in tests.
pub trait Locate {
    fn locate(&self) -> impl Future<Output = Result<(f64, f64), WeatherError>> + Send;
}

/// IP-based geolocation with a short-lived cached fix.
#[derive(Debug)]
pub struct GeoipLocator {
    client: Client,
    base_url: String,
    last_fix: Mutex<Option<CachedFix>>,
}

#[derive(Debug, Clone, Copy)]
struct CachedFix {
    at: Instant,
    lat: f64,
    lon: f64,
}

impl Default for GeoipLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoipLocator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(GEOIP_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(LOCATE_TIMEOUT)
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
            last_fix: Mutex::new(None),
        }
    }

    fn cached(&self) -> Option<(f64, f64)> {
        let guard = self.last_fix.lock().ok()?;
        let fix = (*guard)?;
        (fix.at.elapsed() <= FIX_MAX_AGE).then_some((fix.lat, fix.lon))
    }

    fn remember(&self, lat: f64, lon: f64) {
        if let Ok(mut guard) = self.last_fix.lock() {
            *guard = Some(CachedFix {
                at: Instant::now(),
                lat,
                lon,
            });
        }
    }
}

impl Locate for GeoipLocator {
    async fn locate(&self) -> Result<(f64, f64), WeatherError> {
        if let Some((lat, lon)) = self.cached() {
            debug!(lat, lon, "reusing cached geolocation fix");
            return Ok((lat, lon));
        }

        let response: IpApiResponse = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|err| WeatherError::LocationUnavailable(err.to_string()))?
            .json()
            .await
            .map_err(|err| WeatherError::LocationUnavailable(err.to_string()))?;

        let (Some(lat), Some(lon)) = (response.latitude, response.longitude) else {
            return Err(WeatherError::LocationUnavailable(
                "geolocation response missing coordinates".to_string(),
            ));
        };

        self.remember(lat, lon);
        Ok((lat, lon))
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
}
