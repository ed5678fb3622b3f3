use crate::{
    core::geo::{LatLng, LatLngBounds},
    data::geojson::GeoJson,
    layers::base::{Layer, LayerKind, LayerProperties},
    style::PathStyle,
};

/// Overlay layer drawing tectonic plate boundaries as polylines.
pub struct PlateLayer {
    properties: LayerProperties,
    polylines: Vec<Vec<LatLng>>,
    style: PathStyle,
}

impl PlateLayer {
    pub fn new(id: String, name: String, polylines: Vec<Vec<LatLng>>, style: PathStyle) -> Self {
        let properties = LayerProperties::new(id, name, LayerKind::Vector).with_z_index(1);
        Self {
            properties,
            polylines,
            style,
        }
    }

    /// Flattens a plate boundary document into drawable polylines.
    pub fn from_geojson(id: String, name: String, geojson: &GeoJson, style: PathStyle) -> Self {
        Self::new(id, name, geojson.to_polylines(), style)
    }

    pub fn polylines(&self) -> &[Vec<LatLng>] {
        &self.polylines
    }

    pub fn style(&self) -> &PathStyle {
        &self.style
    }
}

impl Layer for PlateLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        let mut points = self.polylines.iter().flatten();
        let first = points.next()?;
        let mut bounds = LatLngBounds::new(*first, *first);
        for point in points {
            bounds.extend(point);
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
            "style": self.style,
            "polylines": self.polylines,
        })
    }
}
