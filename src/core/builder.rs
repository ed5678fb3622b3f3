//! Map builder for fluent composition assembly
//!
//! Wires fetched feed data into a complete map description: base tile
//! layers, the earthquake marker overlay, the optional plate overlay,
//! the depth legend, and the layer control. Building never performs I/O;
//! `fetch_and_build` runs the feed chain first and only composes once
//! every configured feed has loaded.

use crate::{
    core::{
        config::MapConfig,
        map::{Map, MapOptions},
    },
    data::{
        feed::{FeedClient, FeedData},
        geojson::GeoJson,
        quake::EarthquakeCollection,
    },
    layers::{
        base::Layer,
        marker::{MarkerLayer, MarkerOptions},
        tile::TileLayer,
        vector::PlateLayer,
    },
    style::{depth::DepthScale, PathStyle},
    ui::{controls::LayerControl, legend::Legend},
    MapError, Result,
};

/// Builder for assembling a composed map
pub struct MapBuilder {
    config: MapConfig,
    depth_scale: DepthScale,
    base_layers: Option<Vec<TileLayer>>,
    earthquakes: Option<EarthquakeCollection>,
    plates: Option<GeoJson>,
    legend: bool,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self {
            config: MapConfig::default(),
            depth_scale: DepthScale::default(),
            base_layers: None,
            earthquakes: None,
            plates: None,
            legend: true,
        }
    }

    pub fn with_config(mut self, config: MapConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_depth_scale(mut self, scale: DepthScale) -> Self {
        self.depth_scale = scale;
        self
    }

    /// Overrides the default base layer set.
    pub fn with_base_layers(mut self, layers: Vec<TileLayer>) -> Self {
        self.base_layers = Some(layers);
        self
    }

    pub fn with_earthquakes(mut self, earthquakes: EarthquakeCollection) -> Self {
        self.earthquakes = Some(earthquakes);
        self
    }

    pub fn with_plates(mut self, plates: GeoJson) -> Self {
        self.plates = Some(plates);
        self
    }

    pub fn with_feed_data(mut self, data: FeedData) -> Self {
        self.earthquakes = Some(data.earthquakes);
        self.plates = data.plates;
        self
    }

    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    /// Fetches every configured feed, then builds. Composition never
    /// starts if any fetch failed.
    pub async fn fetch_and_build(mut self, client: &FeedClient) -> Result<Map> {
        let data = client.load(&self.config).await?;
        self.earthquakes = Some(data.earthquakes);
        self.plates = data.plates;
        self.build()
    }

    /// Assembles the composition from already-loaded data.
    pub fn build(self) -> Result<Map> {
        let earthquakes = self
            .earthquakes
            .ok_or_else(|| MapError::Layer("earthquake data not provided".to_string()))?;

        let mut map = Map::new(MapOptions {
            center: self.config.center,
            zoom: self.config.zoom,
            ..MapOptions::default()
        });

        // Base set follows the composition variant: the plate-bearing
        // composition ships four styles, the plain one the streets/dark
        // pair.
        let bases = match self.base_layers {
            Some(layers) => layers,
            None => {
                if self.config.plates_url.is_some() {
                    TileLayer::base_set(&self.config.access_token)
                } else {
                    TileLayer::classic_pair(&self.config.access_token)
                }
            }
        };

        let mut first_base_id = None;
        for base in bases {
            if first_base_id.is_none() {
                first_base_id = Some(base.id().to_string());
            }
            map.add_layer(Box::new(base))?;
        }
        if let Some(id) = &first_base_id {
            map.layers_mut().set_active_base(id)?;
        }

        let marker_options = MarkerOptions::new(self.config.magnitude_scale, &self.depth_scale);
        let marker_layer = MarkerLayer::from_features(
            "earthquakes".to_string(),
            "Earthquakes".to_string(),
            &earthquakes.features,
            &marker_options,
        );
        log::debug!("composed {} earthquake markers", marker_layer.len());
        map.add_layer(Box::new(marker_layer))?;

        if let Some(plates) = &self.plates {
            let plate_layer = PlateLayer::from_geojson(
                "plates".to_string(),
                "Tectonic Plates".to_string(),
                plates,
                PathStyle::default(),
            );
            log::debug!("composed {} plate polylines", plate_layer.polylines().len());
            map.add_layer(Box::new(plate_layer))?;
        }

        if self.legend {
            map.set_legend(Legend::for_depth_scale(&self.depth_scale));
        }
        let control = LayerControl::from_layers(map.layers());
        map.set_layer_control(control);

        Ok(map)
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
