#![allow(clippy::missing_errors_doc)]

use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skydash",
    version,
    about = "OpenWeatherMap terminal dashboard with daily forecast rollups"
)]
pub struct Cli {
    /// City name (default: resolve via geolocation, falling back to New Delhi)
    pub city: Option<String>,

    /// OpenWeatherMap API key (falls back to OPENWEATHER_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Direct latitude (requires --lon)
    #[arg(long, conflicts_with = "city")]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, conflicts_with = "city")]
    pub lon: Option<f64>,

    /// Prompt for follow-up city searches after the first render
    #[arg(long)]
    pub interactive: bool,

    /// Current-conditions endpoint override
    #[arg(long, hide = true)]
    pub current_url: Option<String>,

    /// Forecast endpoint override
    #[arg(long, hide = true)]
    pub forecast_url: Option<String>,

    /// Geolocation endpoint override
    #[arg(long, hide = true)]
    pub geoip_url: Option<String>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            _ => Ok(()),
        }
    }

    pub fn api_key(&self) -> anyhow::Result<String> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        std::env::var("OPENWEATHER_API_KEY")
            .map_err(|_| anyhow::anyhow!("no API key: pass --api-key or set OPENWEATHER_API_KEY"))
    }
}
