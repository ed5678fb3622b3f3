//! Prelude module for common quakemap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use quakemap::prelude::*;`

pub use crate::core::{
    builder::MapBuilder,
    config::{FeedProfile, MapConfig},
    constants,
    geo::{LatLng, LatLngBounds},
    map::{Map, MapOptions},
};

pub use crate::layers::{
    base::{Layer, LayerKind, LayerProperties},
    manager::LayerManager,
    marker::{build_markers, CircleMarker, MarkerLayer, MarkerOptions},
    tile::{TileLayer, TileLayerOptions},
    vector::PlateLayer,
};

pub use crate::data::{
    feed::{FeedClient, FeedData},
    geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry},
    quake::{EarthquakeCollection, EarthquakeFeature},
};

pub use crate::style::{
    depth::{DepthBand, DepthScale},
    CircleStyle, PathStyle,
};

pub use crate::ui::{
    controls::{LayerControl, Position},
    legend::{Legend, LegendEntry},
};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
