pub mod feed;
pub mod geojson;
pub mod quake;
