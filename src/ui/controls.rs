use crate::layers::base::LayerKind;
use crate::layers::manager::LayerManager;
use serde::{Deserialize, Serialize};

/// Screen anchor for UI elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Declarative layer switcher: exclusive base maps and independent
/// overlay toggles, in render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerControl {
    pub base_layers: Vec<String>,
    pub overlays: Vec<String>,
    pub collapsed: bool,
    pub position: Position,
}

impl LayerControl {
    /// Builds the control from the manager's current layer set, using
    /// display names. Expanded by default.
    pub fn from_layers(manager: &LayerManager) -> Self {
        let base_layers = manager
            .base_layers()
            .into_iter()
            .map(|layer| layer.name().to_string())
            .collect();
        let overlays = manager
            .layers()
            .into_iter()
            .filter(|layer| layer.kind() != LayerKind::Tile)
            .map(|layer| layer.name().to_string())
            .collect();

        Self {
            base_layers,
            overlays,
            collapsed: false,
            position: Position::TopRight,
        }
    }

    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::marker::MarkerLayer;
    use crate::layers::tile::TileLayer;

    #[test]
    fn test_control_lists_layers_by_name() {
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

        let control = LayerControl::from_layers(&manager);
        assert_eq!(control.base_layers, ["Satellite", "Grayscale", "Dark", "Outdoors"]);
        assert_eq!(control.overlays, ["Earthquakes"]);
        assert!(!control.collapsed);
        assert_eq!(control.position, Position::TopRight);
    }
}
