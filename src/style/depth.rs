//! Depth-to-color classification
//!
//! Epicenter depth drives marker fill color through an ordered band table.
//! The table is fixed at startup and shared; classification is a pure
//! scan that always yields a color.

use crate::core::constants;
use crate::{MapError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One classification band: depths up to `upper_bound_km` (inclusive)
/// take `color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthBand {
    pub upper_bound_km: f64,
    pub color: String,
}

impl DepthBand {
    pub fn new(upper_bound_km: f64, color: impl Into<String>) -> Self {
        Self {
            upper_bound_km,
            color: color.into(),
        }
    }
}

/// Ordered depth-to-color table, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthScale {
    bands: Vec<DepthBand>,
    floor_km: f64,
}

/// The table used by the published compositions, constructed once.
static DEFAULT_SCALE: Lazy<DepthScale> = Lazy::new(|| {
    let bands = constants::DEPTH_BANDS
        .iter()
        .map(|(bound, color)| DepthBand::new(*bound, *color))
        .collect();
    DepthScale::new(bands).expect("default depth table is sorted and non-empty")
});

impl DepthScale {
    /// Builds a scale, rejecting an empty or non-ascending band list.
    pub fn new(bands: Vec<DepthBand>) -> Result<Self> {
        if bands.is_empty() {
            return Err(MapError::Style(
                "depth scale needs at least one band".to_string(),
            ));
        }
        if bands
            .windows(2)
            .any(|pair| pair[0].upper_bound_km >= pair[1].upper_bound_km)
        {
            return Err(MapError::Style(
                "depth bands must be strictly ascending".to_string(),
            ));
        }
        Ok(Self {
            bands,
            floor_km: constants::DEPTH_FLOOR_KM,
        })
    }

    /// The shared default scale.
    pub fn shared() -> &'static DepthScale {
        &DEFAULT_SCALE
    }

    pub fn bands(&self) -> &[DepthBand] {
        &self.bands
    }

    /// Lower display edge of the first band, used by the legend.
    pub fn floor_km(&self) -> f64 {
        self.floor_km
    }

    pub fn with_floor_km(mut self, floor_km: f64) -> Self {
        self.floor_km = floor_km;
        self
    }

    /// Color for a depth in kilometers.
    ///
    /// Scans bands in ascending order and returns the first whose bound is
    /// `>= depth_km`. Bounds are inclusive, so a depth sitting exactly on a
    /// bound takes the earlier band. Depths beyond every bound take the last
    /// band: the tail of the table is an unbounded catch-all regardless of
    /// its numeric bound, so classification is total.
    pub fn classify(&self, depth_km: f64) -> &str {
        match self
            .bands
            .iter()
            .find(|band| depth_km <= band.upper_bound_km)
        {
            Some(band) => &band.color,
            None => &self.bands[self.bands.len() - 1].color,
        }
    }
}

impl Default for DepthScale {
    fn default() -> Self {
        DEFAULT_SCALE.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shallow_depths_take_first_band() {
        let scale = DepthScale::shared();
        assert_eq!(scale.classify(0.0), "#3af256");
        assert_eq!(scale.classify(9.99), "#3af256");
        assert_eq!(scale.classify(10.0), "#3af256");
    }

    #[test]
    fn test_negative_depth_takes_first_band() {
        // Above-sea-level epicenters report negative depth
        assert_eq!(DepthScale::shared().classify(-3.2), "#3af256");
    }

    #[test]
    fn test_bound_is_inclusive_to_earlier_band() {
        let scale = DepthScale::shared();
        assert_eq!(scale.classify(30.0), "#04bfc2");
        assert_eq!(scale.classify(30.000001), "#266ad1");
        assert_eq!(scale.classify(90.0), "#a404bd");
    }

    #[test]
    fn test_between_bounds() {
        let scale = DepthScale::shared();
        assert_eq!(scale.classify(12.0), "#04bfc2");
        assert_eq!(scale.classify(42.0), "#266ad1");
        assert_eq!(scale.classify(69.0), "#0437c2");
        assert_eq!(scale.classify(400.0), "#bd040d");
    }

    #[test]
    fn test_catch_all_beyond_every_bound() {
        // Deeper than the nominal tail bound still classifies
        assert_eq!(DepthScale::shared().classify(1500.0), "#bd040d");
    }

    #[test]
    fn test_floor_only_moves_the_display_edge() {
        let scale = DepthScale::shared().clone().with_floor_km(0.0);
        assert_eq!(scale.floor_km(), 0.0);
        // Classification ignores the floor
        assert_eq!(scale.classify(-5.0), "#3af256");
    }

    #[test]
    fn test_rejects_empty_scale() {
        assert!(DepthScale::new(Vec::new()).is_err());
    }

    #[test]
    fn test_rejects_unsorted_scale() {
        let bands = vec![DepthBand::new(30.0, "#111111"), DepthBand::new(10.0, "#222222")];
        assert!(DepthScale::new(bands).is_err());
    }
}
