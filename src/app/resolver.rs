use tracing::warn;

use crate::data::geoip::Locate;
use crate::domain::weather::{LocationQuery, ResolvedLocation};

pub const DEFAULT_PLACE: &str = "New Delhi";

/// Resolves the target location. An explicit place name wins outright;
/// otherwise geolocation is tried and the fixed default place covers every
/// failure mode, so resolution itself never fails.
#[derive(Debug)]
pub struct Resolver<L> {
    locator: L,
    default_place: String,
}

impl<L: Locate> Resolver<L> {
    pub fn new(locator: L) -> Self {
        Self::with_default_place(locator, DEFAULT_PLACE)
    }

    pub fn with_default_place(locator: L, place: impl Into<String>) -> Self {
        Self {
            locator,
            default_place: place.into(),
        }
    }

    #[must_use]
    pub fn default_place(&self) -> &str {
        &self.default_place
    }

    pub async fn resolve(&self, explicit: Option<&str>) -> ResolvedLocation {
        if let Some(place) = explicit {
            return ResolvedLocation::named(LocationQuery::place(place));
        }

        match self.locator.locate().await {
            Ok((lat, lon)) => ResolvedLocation::geolocated(lat, lon),
            Err(err) => {
                warn!(%err, fallback = %self.default_place, "geolocation unavailable");
                ResolvedLocation::named(LocationQuery::place(&self.default_place))
            }
        }
    }
}
