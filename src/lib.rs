//! # Quakemap
//!
//! An earthquake map composition engine inspired by Leaflet's layer model.
//!
//! The crate turns public earthquake GeoJSON feeds into a declarative map
//! composition: circle markers sized by magnitude and colored by epicenter
//! depth, tectonic plate boundary overlays, base tile layer definitions, a
//! depth legend, and a layer control. Rendering, projection, and tiling are
//! delegated to whatever map engine consumes the composition.

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod style;
pub mod ui;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::MapBuilder,
    config::{FeedProfile, MapConfig},
    geo::{LatLng, LatLngBounds},
    map::{Map, MapOptions},
};

pub use crate::layers::{
    base::Layer, manager::LayerManager, marker::MarkerLayer, tile::TileLayer,
    vector::PlateLayer,
};

pub use crate::data::{feed::FeedClient, quake::EarthquakeCollection};

pub use crate::style::{depth::DepthScale, CircleStyle, PathStyle};

pub use crate::ui::{controls::LayerControl, legend::Legend};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The feed endpoint could not be reached or answered with a non-2xx
    /// status. Never retried automatically.
    #[error("feed unavailable: {0}")]
    FeedUnavailable(String),

    /// The feed answered, but the body is not the GeoJSON we expect
    /// (undecodable JSON or a feature missing required fields).
    #[error("feed malformed: {0}")]
    FeedMalformed(String),

    #[error("layer error: {0}")]
    Layer(String),

    #[error("style error: {0}")]
    Style(String),
}

/// Error type alias for convenience
pub type Error = MapError;
