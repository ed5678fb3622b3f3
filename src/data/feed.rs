//! Feed loading
//!
//! One shared HTTP client, two fetch operations, and the sequentially
//! nested load the compositions rely on: earthquake data is always
//! available before plate data is requested, and composition only
//! happens after both complete. Failures classify as unavailable
//! (transport/HTTP) or malformed (body) and are never retried.

use crate::core::config::MapConfig;
use crate::core::constants;
use crate::data::{geojson::GeoJson, quake::EarthquakeCollection};
use crate::{MapError, Result};
use once_cell::sync::Lazy;
use reqwest::Client;

/// Shared HTTP client with a custom User-Agent so that public feed
/// servers don't reject the request. Building the client once avoids
/// the cost of TLS and connection pool setup for every fetch.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(constants::FEED_USER_AGENT)
        .build()
        .expect("failed to build reqwest client")
});

/// Everything the composition step needs from the network.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedData {
    pub earthquakes: EarthquakeCollection,
    pub plates: Option<GeoJson>,
}

/// Stateless fetcher for the public GeoJSON feeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedClient;

impl FeedClient {
    pub fn new() -> Self {
        Self
    }

    /// Fetches and decodes an earthquake summary feed.
    pub async fn fetch_earthquakes(&self, url: &str) -> Result<EarthquakeCollection> {
        let body = self.fetch_text(url).await?;
        EarthquakeCollection::from_str(&body)
    }

    /// Fetches and decodes a plate boundary feed.
    pub async fn fetch_plates(&self, url: &str) -> Result<GeoJson> {
        let body = self.fetch_text(url).await?;
        GeoJson::from_str(&body)
    }

    /// Loads every feed the config names. The plate feed is requested
    /// only after the earthquake feed has completed; the first error
    /// aborts the chain before any composition can start.
    pub async fn load(&self, config: &MapConfig) -> Result<FeedData> {
        log::debug!("fetching earthquake feed {}", config.earthquake_url);
        let earthquakes = self.fetch_earthquakes(&config.earthquake_url).await?;
        log::info!("loaded {} earthquake features", earthquakes.len());

        let plates = match &config.plates_url {
            Some(url) => {
                log::debug!("fetching plate feed {}", url);
                let plates = self.fetch_plates(url).await?;
                log::info!("loaded {} plate features", plates.features().len());
                Some(plates)
            }
            None => None,
        };

        Ok(FeedData {
            earthquakes,
            plates,
        })
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = HTTP_CLIENT
            .get(url)
            .send()
            .await
            .map_err(|e| MapError::FeedUnavailable(format!("{}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("feed {} answered HTTP {}", url, status);
            return Err(MapError::FeedUnavailable(format!("{}: HTTP {}", url, status)));
        }

        response
            .text()
            .await
            .map_err(|e| MapError::FeedUnavailable(format!("{}: {}", url, e)))
    }
}
