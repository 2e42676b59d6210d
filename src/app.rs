pub mod resolver;

use anyhow::Result;
use chrono::Local;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::cli::Cli;
use crate::data::geoip::{GeoipLocator, Locate};
use crate::data::owm::WeatherClient;
use crate::domain::aggregate::aggregate;
use crate::domain::display::{CurrentDisplay, FORECAST_DAYS, day_labels};
use crate::domain::weather::{
    LocationOrigin, LocationQuery, ResolvedLocation, WeatherReport,
};
use crate::error::WeatherError;
use crate::ui;
use self::resolver::Resolver;

pub async fn run(cli: &Cli) -> Result<()> {
    let client = build_client(cli)?;

    let (resolved, report) = if let Some(city) = cli.city.as_deref() {
        search(&client, city).await?
    } else if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        let resolved = ResolvedLocation::named(LocationQuery::coords(lat, lon));
        let report = client.fetch_report(&resolved.query).await?;
        (resolved, report)
    } else {
        let locator = match &cli.geoip_url {
            Some(url) => GeoipLocator::with_base_url(url.as_str()),
            None => GeoipLocator::new(),
        };
        startup_report(&client, &Resolver::new(locator)).await?
    };

    render(&resolved, &report);

    if cli.interactive {
        search_loop(&client).await?;
    }

    Ok(())
}

/// Automatic startup flow: geolocation failures never surface, and a fetch
/// failure for a geolocated position is retried once against the default
/// place before giving up.
pub async fn startup_report<L: Locate>(
    client: &WeatherClient,
    resolver: &Resolver<L>,
) -> Result<(ResolvedLocation, WeatherReport), WeatherError> {
    let resolved = resolver.resolve(None).await;

    match client.fetch_report(&resolved.query).await {
        Ok(report) => Ok((resolved, report)),
        Err(err) if resolved.origin == LocationOrigin::Geolocated => {
            warn!(%err, fallback = resolver.default_place(), "geolocated fetch failed, retrying");
            let fallback =
                ResolvedLocation::named(LocationQuery::place(resolver.default_place()));
            let report = client.fetch_report(&fallback.query).await?;
            Ok((fallback, report))
        }
        Err(err) => Err(err),
    }
}

/// Explicit user search: errors surface and nothing is retried.
pub async fn search(
    client: &WeatherClient,
    city: &str,
) -> Result<(ResolvedLocation, WeatherReport), WeatherError> {
    info!(city, "searching");
    let resolved = ResolvedLocation::named(LocationQuery::place(city));
    let report = client.fetch_report(&resolved.query).await?;
    Ok((resolved, report))
}

async fn search_loop(client: &WeatherClient) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last_query: Option<String> = None;

    loop {
        match &last_query {
            Some(query) => println!("search (last query '{query}'; blank to quit):"),
            None => println!("search (blank to quit):"),
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let city = line.trim();
        if city.is_empty() {
            break;
        }

        match search(client, city).await {
            Ok((resolved, report)) => {
                last_query = None;
                render(&resolved, &report);
            }
            Err(err) => {
                // Keep the failed query visible so the user can retry it.
                last_query = Some(city.to_string());
                eprintln!("search failed: {err}");
            }
        }
    }

    Ok(())
}

fn render(resolved: &ResolvedLocation, report: &WeatherReport) {
    let mut rng = rand::rng();
    let display = CurrentDisplay::build(&report.current, resolved.origin, &Local, &mut rng);
    let summaries = aggregate(&report.samples, &Local);
    let horizon = summaries.len().min(FORECAST_DAYS);
    let labels = day_labels(Local::now().date_naive(), horizon);
    ui::render(&display, &summaries[..horizon], &labels);
}

fn build_client(cli: &Cli) -> Result<WeatherClient> {
    let api_key = cli.api_key()?;
    Ok(match (&cli.current_url, &cli.forecast_url) {
        (Some(current), Some(forecast)) => {
            WeatherClient::with_base_urls(api_key, current.as_str(), forecast.as_str())
        }
        _ => WeatherClient::new(api_key),
    })
}
