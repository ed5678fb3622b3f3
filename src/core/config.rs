//! Configuration for feed selection and composition defaults
//!
//! Profiles mirror the two published compositions: the daily feed with a
//! United States framing, and the monthly feed with tectonic plates and a
//! whole-world framing. `Custom` is the escape hatch for anything else.

use crate::core::{constants, geo::LatLng};

#[derive(Debug, Clone, PartialEq)]
pub enum FeedProfile {
    /// Past-day feed, no plate overlay, US-centered view.
    Daily,
    /// Past-month feed plus tectonic plates, world view.
    Monthly,
    Custom(MapConfig),
}

impl FeedProfile {
    pub fn resolve(&self) -> MapConfig {
        match self {
            Self::Daily => MapConfig {
                earthquake_url: constants::ALL_DAY_FEED_URL.to_string(),
                plates_url: None,
                center: LatLng::new(constants::DAILY_CENTER.0, constants::DAILY_CENTER.1),
                zoom: constants::DAILY_ZOOM,
                magnitude_scale: constants::DAILY_MAGNITUDE_SCALE,
                access_token: String::new(),
            },
            Self::Monthly => MapConfig {
                earthquake_url: constants::ALL_MONTH_FEED_URL.to_string(),
                plates_url: Some(constants::TECTONIC_PLATES_URL.to_string()),
                center: LatLng::new(constants::MONTHLY_CENTER.0, constants::MONTHLY_CENTER.1),
                zoom: constants::MONTHLY_ZOOM,
                magnitude_scale: constants::MONTHLY_MAGNITUDE_SCALE,
                access_token: String::new(),
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

impl Default for FeedProfile {
    fn default() -> Self {
        Self::Monthly
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Earthquake summary feed endpoint.
    pub earthquake_url: String,
    /// Plate boundary feed endpoint; `None` skips the overlay entirely.
    pub plates_url: Option<String>,
    /// Initial view center.
    pub center: LatLng,
    /// Initial view zoom.
    pub zoom: f64,
    /// Meters of circle radius per unit of magnitude.
    pub magnitude_scale: f64,
    /// Opaque tile-provider credential, substituted into tile URL
    /// templates as-is. Never generated or validated here.
    pub access_token: String,
}

impl MapConfig {
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    pub fn with_magnitude_scale(mut self, scale: f64) -> Self {
        self.magnitude_scale = scale;
        self
    }

    pub fn with_view(mut self, center: LatLng, zoom: f64) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        FeedProfile::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_profile() {
        let config = FeedProfile::Daily.resolve();
        assert!(config.earthquake_url.ends_with("all_day.geojson"));
        assert!(config.plates_url.is_none());
        assert_eq!(config.magnitude_scale, 10_000.0);
        assert_eq!(config.zoom, 5.0);
    }

    #[test]
    fn test_monthly_profile() {
        let config = FeedProfile::Monthly.resolve();
        assert!(config.earthquake_url.ends_with("all_month.geojson"));
        assert!(config.plates_url.is_some());
        assert_eq!(config.magnitude_scale, 40_000.0);
        assert_eq!(config.zoom, 3.0);
    }

    #[test]
    fn test_custom_profile_passes_through() {
        let config = MapConfig::default()
            .with_view(LatLng::new(35.7, 139.7), 8.0)
            .with_magnitude_scale(5_000.0);
        let resolved = FeedProfile::Custom(config.clone()).resolve();
        assert_eq!(resolved, config);
    }

    #[test]
    fn test_builder_style_overrides() {
        let config = FeedProfile::Monthly
            .resolve()
            .with_access_token("pk.test")
            .with_magnitude_scale(20_000.0);
        assert_eq!(config.access_token, "pk.test");
        assert_eq!(config.magnitude_scale, 20_000.0);
    }
}
