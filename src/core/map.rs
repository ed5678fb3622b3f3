use crate::{
    core::geo::{LatLng, LatLngBounds},
    layers::{base::Layer, manager::LayerManager},
    ui::{controls::LayerControl, legend::Legend},
    Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: f64,
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
    pub attribution_control: bool,
    pub zoom_control: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: LatLng::default(),
            zoom: 2.0,
            min_zoom: None,
            max_zoom: None,
            attribution_control: true,
            zoom_control: true,
        }
    }
}

/// The composed map: ordered layers plus legend and control metadata.
///
/// This is the hand-off boundary. An external engine takes the
/// description and owns projection, tiling, and interaction; nothing
/// here renders.
pub struct Map {
    options: MapOptions,
    layers: LayerManager,
    legend: Option<Legend>,
    layer_control: Option<LayerControl>,
}

impl Map {
    pub fn new(options: MapOptions) -> Self {
        Self {
            options,
            layers: LayerManager::new(),
            legend: None,
            layer_control: None,
        }
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn add_layer(&mut self, layer: Box<dyn Layer>) -> Result<()> {
        self.layers.add_layer(layer)
    }

    pub fn layers(&self) -> &LayerManager {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut LayerManager {
        &mut self.layers
    }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    pub fn set_layer_control(&mut self, control: LayerControl) {
        self.layer_control = Some(control);
    }

    pub fn layer_control(&self) -> Option<&LayerControl> {
        self.layer_control.as_ref()
    }

    /// Union of the visible overlays' extents.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for layer in self.layers.layers() {
            if !layer.is_visible() {
                continue;
            }
            if let Some(layer_bounds) = layer.bounds() {
                bounds = Some(match bounds {
                    Some(existing) => existing.union(&layer_bounds),
                    None => layer_bounds,
                });
            }
        }
        bounds
    }

    /// The full scene description, in render order, for the external
    /// engine.
    pub fn describe(&self) -> serde_json::Value {
        let layers: Vec<_> = self
            .layers
            .layers()
            .into_iter()
            .map(|layer| layer.describe())
            .collect();

        serde_json::json!({
            "center": self.options.center,
            "zoom": self.options.zoom,
            "layers": layers,
            "legend": self.legend,
            "layer_control": self.layer_control,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::marker::{CircleMarker, MarkerLayer};
    use crate::style::CircleStyle;

    fn marker(lat: f64, lng: f64) -> CircleMarker {
        CircleMarker {
            position: LatLng::new(lat, lng),
            radius_m: 1000.0,
            style: CircleStyle::default(),
            popup_text: String::new(),
        }
    }

    #[test]
    fn test_map_bounds_from_visible_overlays() {
        let mut map = Map::new(MapOptions::default());
        map.add_layer(Box::new(MarkerLayer::new(
            "earthquakes".to_string(),
            "Earthquakes".to_string(),
            vec![marker(34.0, -118.2), marker(37.8, -122.4)],
        )))
        .unwrap();

        let bounds = map.bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(34.0, -122.4));
        assert_eq!(bounds.north_east, LatLng::new(37.8, -118.2));

        map.layers_mut()
            .set_overlay_visible("earthquakes", false)
            .unwrap();
        assert!(map.bounds().is_none());
    }

    #[test]
    fn test_describe_shape() {
        let mut map = Map::new(MapOptions {
            center: LatLng::new(27.5, -40.8),
            zoom: 3.0,
            ..MapOptions::default()
        });
        map.add_layer(Box::new(MarkerLayer::new(
            "earthquakes".to_string(),
            "Earthquakes".to_string(),
            vec![marker(0.0, 0.0)],
        )))
        .unwrap();

        let description = map.describe();
        assert_eq!(description["zoom"], 3.0);
        assert_eq!(description["layers"].as_array().unwrap().len(), 1);
        assert_eq!(description["layers"][0]["type"], "marker");
        assert!(description["legend"].is_null());
    }
}
