use crate::style::depth::DepthScale;
use crate::ui::controls::Position;
use serde::{Deserialize, Serialize};

/// One legend row: a color swatch and its depth range label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// The depth legend shown alongside the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
    pub position: Position,
}

impl Legend {
    /// One row per depth band. Each row samples the scale just above its
    /// lower edge so the swatch always matches what the classifier would
    /// assign inside that range; the final row is open-ended.
    pub fn for_depth_scale(scale: &DepthScale) -> Self {
        let bands = scale.bands();
        let mut entries = Vec::with_capacity(bands.len());
        let mut lower = scale.floor_km();

        for (index, band) in bands.iter().enumerate() {
            let color = scale.classify(lower + 1.0).to_string();
            let label = if index + 1 < bands.len() {
                format!("{} km \u{2013} {} km", lower, band.upper_bound_km)
            } else {
                format!("{}+ km", lower)
            };
            entries.push(LegendEntry { label, color });
            lower = band.upper_bound_km;
        }

        Self {
            title: "Epicenter Depth".to_string(),
            entries,
            position: Position::BottomRight,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}
