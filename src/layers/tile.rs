//! Declarative base tile layers
//!
//! Tile layers here are pure descriptions: a URL template plus display
//! options. The external renderer owns tile math, fetching, and caching;
//! this module only knows how to spell the URLs, including substituting
//! the opaque provider access token.

use crate::core::constants;
use crate::core::geo::LatLngBounds;
use crate::layers::base::{Layer, LayerKind, LayerProperties};
use serde::{Deserialize, Serialize};

/// Mapbox static style tile endpoint, Leaflet template syntax.
const MAPBOX_STYLE_URL: &str =
    "https://api.mapbox.com/styles/v1/mapbox/{id}/tiles/{z}/{x}/{y}?access_token={accessToken}";

const MAPBOX_ATTRIBUTION: &str =
    "Map data © OpenStreetMap contributors, CC-BY-SA, Imagery © Mapbox";

const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayerOptions {
    pub tile_size: u32,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Zoom correction for oversized tiles (512px tiles use -1).
    pub zoom_offset: i8,
    pub attribution: Option<String>,
    pub subdomains: Vec<String>,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            tile_size: 256,
            min_zoom: 0,
            max_zoom: constants::MAX_ZOOM,
            zoom_offset: 0,
            attribution: None,
            subdomains: Vec::new(),
        }
    }
}

/// A base map layer described by a URL template.
pub struct TileLayer {
    properties: LayerProperties,
    url_template: String,
    options: TileLayerOptions,
}

impl TileLayer {
    pub fn new(id: String, name: String, url_template: String, options: TileLayerOptions) -> Self {
        let properties = LayerProperties::new(id, name, LayerKind::Tile).with_z_index(0);
        Self {
            properties,
            url_template,
            options,
        }
    }

    /// A Mapbox style layer with the default 256px tiles.
    pub fn mapbox(id: &str, name: &str, style_id: &str, access_token: &str) -> Self {
        Self::mapbox_with_options(id, name, style_id, access_token, TileLayerOptions {
            attribution: Some(MAPBOX_ATTRIBUTION.to_string()),
            ..TileLayerOptions::default()
        })
    }

    /// A Mapbox style layer serving 512px tiles (zoom offset -1).
    pub fn mapbox_512(id: &str, name: &str, style_id: &str, access_token: &str) -> Self {
        Self::mapbox_with_options(id, name, style_id, access_token, TileLayerOptions {
            tile_size: 512,
            zoom_offset: -1,
            attribution: Some(MAPBOX_ATTRIBUTION.to_string()),
            ..TileLayerOptions::default()
        })
    }

    fn mapbox_with_options(
        id: &str,
        name: &str,
        style_id: &str,
        access_token: &str,
        options: TileLayerOptions,
    ) -> Self {
        let url_template = MAPBOX_STYLE_URL
            .replace("{id}", style_id)
            .replace("{accessToken}", access_token);
        Self::new(id.to_string(), name.to_string(), url_template, options)
    }

    /// The default OpenStreetMap source, for compositions without a
    /// provider token.
    pub fn openstreetmap(id: String, name: String) -> Self {
        let options = TileLayerOptions {
            attribution: Some(OSM_ATTRIBUTION.to_string()),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            ..TileLayerOptions::default()
        };
        Self::new(
            id,
            name,
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            options,
        )
    }

    /// The four-style base set of the monthly composition, satellite first.
    pub fn base_set(access_token: &str) -> Vec<TileLayer> {
        vec![
            Self::mapbox_512("satellite", "Satellite", "satellite-v9", access_token),
            Self::mapbox("grayscale", "Grayscale", "light-v10", access_token),
            Self::mapbox("dark", "Dark", "dark-v10", access_token),
            Self::mapbox("outdoors", "Outdoors", "outdoors-v11", access_token),
        ]
    }

    /// The streets/dark pair of the daily composition, streets first.
    pub fn classic_pair(access_token: &str) -> Vec<TileLayer> {
        vec![
            Self::mapbox_512("streets", "Street Map", "streets-v11", access_token),
            Self::mapbox("dark", "Dark Map", "dark-v10", access_token),
        ]
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    pub fn options(&self) -> &TileLayerOptions {
        &self.options
    }

    /// Concrete tile URL for a coordinate, substituting the template's
    /// z/x/y (and subdomain) placeholders.
    pub fn url_for(&self, z: u8, x: u32, y: u32) -> String {
        let mut url = self
            .url_template
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string());

        if !self.options.subdomains.is_empty() {
            let index = ((x + y) % self.options.subdomains.len() as u32) as usize;
            url = url.replace("{s}", &self.options.subdomains[index]);
        }

        url
    }
}

impl Layer for TileLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }

    fn describe(&self) -> serde_json::Value {
        serde_json::json!({
            "type": self.kind().to_string(),
            "id": self.id(),
            "name": self.name(),
            "visible": self.is_visible(),
            "z_index": self.z_index(),
            "opacity": self.opacity(),
            "url_template": self.url_template,
            "options": self.options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapbox_url_substitution() {
        let layer = TileLayer::mapbox("dark", "Dark", "dark-v10", "pk.test-token");
        let url = layer.url_for(3, 5, 2);

        assert_eq!(
            url,
            "https://api.mapbox.com/styles/v1/mapbox/dark-v10/tiles/3/5/2?access_token=pk.test-token"
        );
    }

    #[test]
    fn test_mapbox_512_options() {
        let layer = TileLayer::mapbox_512("satellite", "Satellite", "satellite-v9", "pk.t");
        assert_eq!(layer.options().tile_size, 512);
        assert_eq!(layer.options().zoom_offset, -1);
        assert!(layer.url_template().contains("satellite-v9"));
    }

    #[test]
    fn test_openstreetmap_subdomains() {
        let layer = TileLayer::openstreetmap("osm".to_string(), "OpenStreetMap".to_string());
        let url = layer.url_for(1, 0, 0);
        assert_eq!(url, "https://a.tile.openstreetmap.org/1/0/0.png");

        let url = layer.url_for(1, 1, 1);
        assert_eq!(url, "https://c.tile.openstreetmap.org/1/1/1.png");
    }

    #[test]
    fn test_base_set_order() {
        let layers = TileLayer::base_set("pk.t");
        let names: Vec<_> = layers.iter().map(|layer| layer.name().to_string()).collect();
        assert_eq!(names, ["Satellite", "Grayscale", "Dark", "Outdoors"]);
    }
}
