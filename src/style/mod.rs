//! Paint styles applied to composed layers.

pub mod depth;

pub use depth::{DepthBand, DepthScale};

use serde::{Deserialize, Serialize};

/// Stroke and fill options for an earthquake circle marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleStyle {
    pub stroke_weight: f64,
    pub stroke_color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            stroke_weight: 1.0,
            stroke_color: "black".to_string(),
            fill_color: "#3388ff".to_string(),
            fill_opacity: 0.8,
        }
    }
}

/// Stroke options for plate boundary polylines. No fill: boundaries are
/// drawn as outlines even when the source geometry is polygonal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub weight: f64,
    pub color: String,
    pub fill_color: Option<String>,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            weight: 1.5,
            color: "#ffaa00".to_string(),
            fill_color: None,
        }
    }
}
