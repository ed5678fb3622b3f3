//! Typed model of the USGS earthquake summary feed
//!
//! The generic GeoJSON model in [`crate::data::geojson`] tolerates
//! free-form properties; the earthquake feed is instead deserialized
//! strictly, so a feature missing magnitude, place, or time classifies
//! the whole response as malformed rather than producing markers with
//! undefined radius or popup text.

use crate::core::geo::LatLng;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// The feed's FeatureCollection of seismic events, in feed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeCollection {
    pub features: Vec<EarthquakeFeature>,
}

impl EarthquakeCollection {
    /// Parses a raw feed body. Undecodable JSON or missing required
    /// fields classify as a malformed feed.
    pub fn from_str(feed_str: &str) -> Result<Self> {
        serde_json::from_str(feed_str)
            .map_err(|e| MapError::FeedMalformed(format!("invalid earthquake feed: {}", e)))
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// One seismic event as reported by the feed. Immutable input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeFeature {
    pub geometry: QuakeGeometry,
    pub properties: QuakeProperties,
}

impl EarthquakeFeature {
    /// Epicenter in (lat, lng), swapped from GeoJSON's (lng, lat, depth)
    /// axis order.
    pub fn position(&self) -> LatLng {
        LatLng::new(self.geometry.coordinates[1], self.geometry.coordinates[0])
    }

    /// Hypocenter depth in kilometers. Negative for epicenters above sea
    /// level.
    pub fn depth_km(&self) -> f64 {
        self.geometry.coordinates[2]
    }
}

/// Point geometry with the feed's three-ordinate position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuakeGeometry {
    /// (longitude, latitude, depth in km)
    pub coordinates: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuakeProperties {
    pub mag: f64,
    pub place: String,
    /// Event time as epoch milliseconds.
    pub time: i64,
}
