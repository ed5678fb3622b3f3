//! Circle markers for seismic events
//!
//! The marker builder is the core transformation of the crate: an ordered
//! sequence of earthquake features in, an ordered sequence of styled
//! circle markers out. No I/O, no shared state; every load produces a
//! fresh set.

use crate::{
    core::geo::{LatLng, LatLngBounds},
    data::quake::EarthquakeFeature,
    layers::base::{Layer, LayerKind, LayerProperties},
    style::{depth::DepthScale, CircleStyle},
};
use chrono::{Local, LocalResult, TimeZone};
use serde::{Deserialize, Serialize};

/// A styled circle marker: one rendered earthquake. Ephemeral render
/// descriptor, never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMarker {
    pub position: LatLng,
    /// Circle radius in meters.
    pub radius_m: f64,
    pub style: CircleStyle,
    pub popup_text: String,
}

/// Knobs for the feature-to-marker transformation.
#[derive(Debug, Clone)]
pub struct MarkerOptions<'a> {
    /// Meters of radius per unit of magnitude.
    pub magnitude_scale: f64,
    pub depth_scale: &'a DepthScale,
    /// Stroke/fill template; the fill color is replaced per feature by
    /// the depth classification.
    pub circle: CircleStyle,
}

impl<'a> MarkerOptions<'a> {
    pub fn new(magnitude_scale: f64, depth_scale: &'a DepthScale) -> Self {
        Self {
            magnitude_scale,
            depth_scale,
            circle: CircleStyle::default(),
        }
    }
}

impl Default for MarkerOptions<'static> {
    fn default() -> Self {
        Self::new(
            crate::core::constants::MONTHLY_MAGNITUDE_SCALE,
            DepthScale::shared(),
        )
    }
}

/// Maps each earthquake feature to a circle marker, preserving input
/// length and order. Position swaps GeoJSON's (lng, lat) to (lat, lng);
/// radius is `mag * magnitude_scale`; fill color comes from the depth
/// scale applied to the third ordinate.
pub fn build_markers(features: &[EarthquakeFeature], options: &MarkerOptions) -> Vec<CircleMarker> {
    features
        .iter()
        .map(|feature| {
            let mut style = options.circle.clone();
            style.fill_color = options.depth_scale.classify(feature.depth_km()).to_string();

            CircleMarker {
                position: feature.position(),
                radius_m: feature.properties.mag * options.magnitude_scale,
                style,
                popup_text: popup_text(feature),
            }
        })
        .collect()
}

/// Popup body: place, magnitude, depth, and the event time rendered in
/// the local timezone.
fn popup_text(feature: &EarthquakeFeature) -> String {
    let when = match Local.timestamp_millis_opt(feature.properties.time) {
        LocalResult::Single(time) | LocalResult::Ambiguous(time, _) => {
            time.format("%a %b %e %Y %H:%M:%S %Z").to_string()
        }
        LocalResult::None => format!("{} ms since epoch", feature.properties.time),
    };

    format!(
        "{}\nMagnitude: {}\nDepth: {} km\n{}",
        feature.properties.place,
        feature.properties.mag,
        feature.depth_km(),
        when
    )
}

/// Overlay layer grouping the markers of one feed load.
pub struct MarkerLayer {
    properties: LayerProperties,
    markers: Vec<CircleMarker>,
}

impl MarkerLayer {
    pub fn new(id: String, name: String, markers: Vec<CircleMarker>) -> Self {
        let properties = LayerProperties::new(id, name, LayerKind::Marker).with_z_index(2);
        Self {
            properties,
            markers,
        }
    }

    /// Builds the layer straight from feed features.
    pub fn from_features(
        id: String,
        name: String,
        features: &[EarthquakeFeature],
        options: &MarkerOptions,
    ) -> Self {
        Self::new(id, name, build_markers(features, options))
    }

    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl Layer for MarkerLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        let mut positions = self.markers.iter().map(|marker| marker.position);
        let first = positions.next()?;
        let mut bounds = LatLngBounds::new(first, first);
        for position in positions {
            bounds.extend(&position);
        }
        Some(bounds)
    }

    fn describe(&self) -> serde_json::Value {
        serde_json::json!({
            "type": self.kind().to_string(),
            "id": self.id(),
            "name": self.name(),
            "visible": self.is_visible(),
            "z_index": self.z_index(),
            "opacity": self.opacity(),
            "interactive": self.properties().interactive,
            "markers": self.markers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::quake::{QuakeGeometry, QuakeProperties};

    fn feature(lng: f64, lat: f64, depth: f64, mag: f64) -> EarthquakeFeature {
        EarthquakeFeature {
            geometry: QuakeGeometry {
                coordinates: [lng, lat, depth],
            },
            properties: QuakeProperties {
                mag,
                place: "somewhere".to_string(),
                time: 1609459200000,
            },
        }
    }

    #[test]
    fn test_preserves_length_and_order() {
        let features = vec![
            feature(-122.4, 37.8, 5.2, 1.0),
            feature(-118.2, 34.0, 12.0, 2.0),
            feature(139.7, 35.7, 80.0, 3.0),
        ];
        let options = MarkerOptions::default();
        let markers = build_markers(&features, &options);

        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].position, LatLng::new(37.8, -122.4));
        assert_eq!(markers[1].position, LatLng::new(34.0, -118.2));
        assert_eq!(markers[2].position, LatLng::new(35.7, 139.7));
    }

    #[test]
    fn test_radius_is_linear_in_magnitude() {
        let features = vec![feature(0.0, 0.0, 5.0, 2.0), feature(0.0, 0.0, 5.0, 4.0)];
        let options = MarkerOptions::new(10_000.0, DepthScale::shared());
        let markers = build_markers(&features, &options);

        assert_eq!(markers[0].radius_m, 20_000.0);
        assert_eq!(markers[1].radius_m, 40_000.0);
        assert_eq!(markers[1].radius_m, 2.0 * markers[0].radius_m);
    }

    #[test]
    fn test_fill_color_tracks_depth() {
        let features = vec![
            feature(0.0, 0.0, 5.0, 1.0),
            feature(0.0, 0.0, 45.0, 1.0),
            feature(0.0, 0.0, 300.0, 1.0),
        ];
        let markers = build_markers(&features, &MarkerOptions::default());

        assert_eq!(markers[0].style.fill_color, "#3af256");
        assert_eq!(markers[1].style.fill_color, "#266ad1");
        assert_eq!(markers[2].style.fill_color, "#bd040d");
        // Stroke template untouched
        assert_eq!(markers[0].style.stroke_color, "black");
        assert_eq!(markers[0].style.fill_opacity, 0.8);
    }

    #[test]
    fn test_popup_text_contents() {
        let mut quake = feature(-118.2, 34.0, 12.0, 4.5);
        quake.properties.place = "Los Angeles".to_string();
        let markers = build_markers(&[quake], &MarkerOptions::default());

        let popup = &markers[0].popup_text;
        assert!(popup.contains("Los Angeles"));
        assert!(popup.contains("Magnitude: 4.5"));
        assert!(popup.contains("Depth: 12 km"));
        // Jan 1 2021 00:00:00 UTC, year survives any local timezone
        assert!(popup.contains("202"));
    }

    #[test]
    fn test_marker_layer_bounds() {
        let features = vec![feature(-122.4, 37.8, 5.0, 1.0), feature(-118.2, 34.0, 5.0, 1.0)];
        let layer = MarkerLayer::from_features(
            "earthquakes".to_string(),
            "Earthquakes".to_string(),
            &features,
            &MarkerOptions::default(),
        );

        let bounds = layer.bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(34.0, -122.4));
        assert_eq!(bounds.north_east, LatLng::new(37.8, -118.2));
    }

    #[test]
    fn test_empty_layer_has_no_bounds() {
        let layer = MarkerLayer::new("empty".to_string(), "Empty".to_string(), Vec::new());
        assert!(layer.bounds().is_none());
        assert!(layer.is_empty());
    }
}
