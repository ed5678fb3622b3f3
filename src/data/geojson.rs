use crate::core::geo::LatLng;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A GeoJSON position: longitude, latitude, and optionally further
/// ordinates. Real feeds mix 2- and 3-element positions, so the length
/// is not fixed.
pub type Position = Vec<f64>;

/// Converts a GeoJSON position to a LatLng, swapping the (lng, lat) axis
/// order to the conventional (lat, lng) pair. Positions with fewer than
/// two ordinates are dropped.
pub fn position_to_lat_lng(position: &[f64]) -> Option<LatLng> {
    match position {
        [lng, lat, ..] => Some(LatLng::new(*lat, *lng)),
        _ => None,
    }
}

/// GeoJSON geometry types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: Position,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

impl GeoJsonGeometry {
    /// Flattens the geometry into polylines of LatLng points. Lines map
    /// one-to-one; polygons contribute every ring as a closed outline;
    /// bare points are skipped since they carry no path to draw.
    pub fn to_polylines(&self) -> Vec<Vec<LatLng>> {
        match self {
            GeoJsonGeometry::Point { .. } | GeoJsonGeometry::MultiPoint { .. } => Vec::new(),
            GeoJsonGeometry::LineString { coordinates } => {
                vec![line_to_lat_lngs(coordinates)]
            }
            GeoJsonGeometry::MultiLineString { coordinates } => {
                coordinates.iter().map(|line| line_to_lat_lngs(line)).collect()
            }
            GeoJsonGeometry::Polygon { coordinates } => {
                coordinates.iter().map(|ring| line_to_lat_lngs(ring)).collect()
            }
            GeoJsonGeometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|polygon| polygon.iter().map(|ring| line_to_lat_lngs(ring)))
                .collect(),
            GeoJsonGeometry::GeometryCollection { geometries } => geometries
                .iter()
                .flat_map(|geometry| geometry.to_polylines())
                .collect(),
        }
    }
}

fn line_to_lat_lngs(line: &[Position]) -> Vec<LatLng> {
    line.iter()
        .filter_map(|position| position_to_lat_lng(position))
        .collect()
}

/// GeoJSON feature with geometry and free-form properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection { features: Vec<GeoJsonFeature> },
}

impl GeoJson {
    /// Parses a raw GeoJSON document. Undecodable input classifies as a
    /// malformed feed.
    pub fn from_str(geojson_str: &str) -> Result<Self> {
        serde_json::from_str(geojson_str)
            .map_err(|e| MapError::FeedMalformed(format!("invalid GeoJSON: {}", e)))
    }

    /// All features in document order.
    pub fn features(&self) -> Vec<&GeoJsonFeature> {
        match self {
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::FeatureCollection { features } => features.iter().collect(),
        }
    }

    /// Flattens every feature geometry into drawable polylines, in
    /// document order.
    pub fn to_polylines(&self) -> Vec<Vec<LatLng>> {
        self.features()
            .iter()
            .filter_map(|feature| feature.geometry.as_ref())
            .flat_map(|geometry| geometry.to_polylines())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLATES_SNIPPET: &str = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"PlateName": "Nazca"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [-80.0, -5.0], [-75.0, -10.0], [-82.0, -15.0], [-80.0, -5.0]
                    ]]
                }
            },
            {
                "type": "Feature",
                "properties": {"PlateName": "Ridge"},
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [
                        [[-30.0, 10.0], [-31.0, 12.0]],
                        [[-32.0, 14.0], [-33.0, 16.0]]
                    ]
                }
            }
        ]
    }
    "#;

    #[test]
    fn test_parse_feature_collection() {
        let geojson = GeoJson::from_str(PLATES_SNIPPET).unwrap();
        assert_eq!(geojson.features().len(), 2);
    }

    #[test]
    fn test_polyline_flattening() {
        let geojson = GeoJson::from_str(PLATES_SNIPPET).unwrap();
        let polylines = geojson.to_polylines();

        // One polygon ring plus two line strings
        assert_eq!(polylines.len(), 3);
        assert_eq!(polylines[0].len(), 4);
        assert_eq!(polylines[1].len(), 2);
    }

    #[test]
    fn test_axis_swap() {
        let geojson = GeoJson::from_str(PLATES_SNIPPET).unwrap();
        let polylines = geojson.to_polylines();

        // Source position is (lng, lat) = (-80, -5)
        assert_eq!(polylines[0][0], LatLng::new(-5.0, -80.0));
    }

    #[test]
    fn test_three_ordinate_positions() {
        let point = position_to_lat_lng(&[-122.4, 37.8, 5.2]);
        assert_eq!(point, Some(LatLng::new(37.8, -122.4)));
        assert_eq!(position_to_lat_lng(&[1.0]), None);
    }

    #[test]
    fn test_malformed_document() {
        let err = GeoJson::from_str("{ not geojson").unwrap_err();
        assert!(matches!(err, MapError::FeedMalformed(_)));
    }
}
