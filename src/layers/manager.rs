use crate::layers::base::{Layer, LayerKind};
use crate::prelude::HashMap;
use crate::{MapError, Result};

/// Manages composed layers, handling ordering and visibility
///
/// Base (tile) layers are mutually exclusive: activating one hides the
/// others, mirroring a map UI's radio-button base switcher. Overlay
/// layers toggle independently.
pub struct LayerManager {
    /// All layers indexed by ID
    layers: HashMap<String, Box<dyn Layer>>,
    /// Ordered list of layer IDs for rendering (sorted by z-index)
    render_order: Vec<String>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self {
            layers: HashMap::default(),
            render_order: Vec::new(),
        }
    }

    /// Adds a layer to the manager. Duplicate IDs are rejected since a
    /// second insert would corrupt the render order.
    pub fn add_layer(&mut self, layer: Box<dyn Layer>) -> Result<()> {
        let layer_id = layer.id().to_string();
        if self.layers.contains_key(&layer_id) {
            return Err(MapError::Layer(format!("duplicate layer id {}", layer_id)));
        }

        let z_index = layer.z_index();
        self.layers.insert(layer_id.clone(), layer);

        // Insert in sorted order by z-index
        let insert_pos = self
            .render_order
            .iter()
            .position(|id| {
                self.layers
                    .get(id)
                    .map(|l| l.z_index() > z_index)
                    .unwrap_or(false)
            })
            .unwrap_or(self.render_order.len());

        self.render_order.insert(insert_pos, layer_id);
        Ok(())
    }

    /// Removes a layer from the manager
    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Box<dyn Layer>> {
        self.render_order.retain(|id| id != layer_id);
        self.layers.remove(layer_id)
    }

    /// Gets a reference to a layer by ID
    pub fn get_layer(&self, layer_id: &str) -> Option<&dyn Layer> {
        self.layers.get(layer_id).map(|l| l.as_ref())
    }

    /// Applies a function to a specific layer mutably
    pub fn with_layer_mut<F, R>(&mut self, layer_id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut dyn Layer) -> R,
    {
        self.layers.get_mut(layer_id).map(|layer| f(layer.as_mut()))
    }

    /// Gets all layers in render order
    pub fn layers(&self) -> Vec<&dyn Layer> {
        self.render_order
            .iter()
            .filter_map(|id| self.layers.get(id).map(|l| l.as_ref()))
            .collect()
    }

    /// Base (tile) layers in render order.
    pub fn base_layers(&self) -> Vec<&dyn Layer> {
        self.layers_of_kind(LayerKind::Tile)
    }

    /// Non-tile overlays in render order.
    pub fn overlays(&self) -> Vec<&dyn Layer> {
        self.layers()
            .into_iter()
            .filter(|layer| layer.kind() != LayerKind::Tile)
            .collect()
    }

    fn layers_of_kind(&self, kind: LayerKind) -> Vec<&dyn Layer> {
        self.layers()
            .into_iter()
            .filter(|layer| layer.kind() == kind)
            .collect()
    }

    /// Makes one base layer visible and hides every other tile layer.
    pub fn set_active_base(&mut self, layer_id: &str) -> Result<()> {
        match self.layers.get(layer_id) {
            Some(layer) if layer.kind() == LayerKind::Tile => {}
            Some(_) => {
                return Err(MapError::Layer(format!("{} is not a base layer", layer_id)));
            }
            None => {
                return Err(MapError::Layer(format!("no such layer {}", layer_id)));
            }
        }

        for (id, layer) in self.layers.iter_mut() {
            if layer.kind() == LayerKind::Tile {
                layer.set_visible(id == layer_id);
            }
        }
        Ok(())
    }

    /// The currently visible base layer, if any.
    pub fn active_base(&self) -> Option<&dyn Layer> {
        self.base_layers()
            .into_iter()
            .find(|layer| layer.is_visible())
    }

    /// Shows or hides an overlay independently of everything else.
    pub fn set_overlay_visible(&mut self, layer_id: &str, visible: bool) -> Result<()> {
        match self.layers.get_mut(layer_id) {
            Some(layer) if layer.kind() != LayerKind::Tile => {
                layer.set_visible(visible);
                Ok(())
            }
            Some(_) => Err(MapError::Layer(format!("{} is a base layer", layer_id))),
            None => Err(MapError::Layer(format!("no such layer {}", layer_id))),
        }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::marker::MarkerLayer;
    use crate::layers::tile::TileLayer;

    fn manager_with_bases() -> LayerManager {
        let mut manager = LayerManager::new();
        for layer in TileLayer::base_set("pk.t") {
            manager.add_layer(Box::new(layer)).unwrap();
        }
        manager
            .add_layer(Box::new(MarkerLayer::new(
                "earthquakes".to_string(),
                "Earthquakes".to_string(),
                Vec::new(),
            )))
            .unwrap();
        manager
    }

    #[test]
    fn test_render_order_by_z_index() {
        let manager = manager_with_bases();
        let layers = manager.layers();

        // Tiles (z 0) come before the marker overlay (z 2)
        assert_eq!(layers.len(), 5);
        assert_eq!(layers[0].kind(), LayerKind::Tile);
        assert_eq!(layers[4].id(), "earthquakes");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut manager = manager_with_bases();
        let dup = MarkerLayer::new("earthquakes".to_string(), "Again".to_string(), Vec::new());
        assert!(manager.add_layer(Box::new(dup)).is_err());
    }

    #[test]
    fn test_exclusive_base_activation() {
        let mut manager = manager_with_bases();
        manager.set_active_base("dark").unwrap();

        let visible: Vec<_> = manager
            .base_layers()
            .into_iter()
            .filter(|layer| layer.is_visible())
            .map(|layer| layer.id().to_string())
            .collect();
        assert_eq!(visible, ["dark"]);
        assert_eq!(manager.active_base().map(|l| l.id().to_string()), Some("dark".to_string()));

        // The marker overlay is untouched by base switching
        assert!(manager.get_layer("earthquakes").unwrap().is_visible());
    }

    #[test]
    fn test_overlay_toggle() {
        let mut manager = manager_with_bases();
        manager.set_overlay_visible("earthquakes", false).unwrap();
        assert!(!manager.get_layer("earthquakes").unwrap().is_visible());

        assert!(manager.set_overlay_visible("dark", false).is_err());
        assert!(manager.set_overlay_visible("missing", true).is_err());
    }

    #[test]
    fn test_remove_layer() {
        let mut manager = manager_with_bases();
        assert!(manager.remove_layer("earthquakes").is_some());
        assert!(manager.get_layer("earthquakes").is_none());
        assert_eq!(manager.len(), 4);
    }
}
